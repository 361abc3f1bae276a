use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_advice::{AdviceSink, use_advice};
use crate::models::{advice::AdviceResponse, error::AppError, form::FormInput};
use crate::services::api::fetch_advice;

/// Progress of the advice request issued by the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub in_flight: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionAction {
    Started,
    Succeeded,
    Failed(String),
}

impl Reducible for SubmissionState {
    type Action = SubmissionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SubmissionAction::Started => Self {
                in_flight: true,
                error: None,
            },
            SubmissionAction::Succeeded => Self {
                in_flight: false,
                error: None,
            },
            SubmissionAction::Failed(message) => Self {
                in_flight: false,
                error: Some(message),
            },
        };
        Rc::new(next)
    }
}

/// Applies a finished request to the advice store.
///
/// A response replaces the stored advice; any error leaves the store untouched
/// and becomes the message shown in the error panel.
pub fn complete_submission(
    store: &impl AdviceSink,
    result: Result<AdviceResponse, AppError>,
) -> SubmissionAction {
    match result {
        Ok(response) => {
            store.update(
                response.advice.unwrap_or_default(),
                response.metrics,
                response.research_sources,
            );
            SubmissionAction::Succeeded
        }
        Err(e) => SubmissionAction::Failed(e.user_message()),
    }
}

/// Handle returned by `use_submission` hook
#[derive(Clone, PartialEq)]
pub struct SubmissionHandle {
    pub in_flight: bool,
    pub error: Option<String>,
    pub submit: Callback<FormInput>,
}

/// Custom hook that sends the form to the backend and pushes the answer into the advice store.
///
/// A second submission is only held back by the disabled button; an in-flight
/// request is never cancelled.
#[hook]
pub fn use_submission() -> SubmissionHandle {
    let advice = use_advice();
    let state = use_reducer(SubmissionState::default);

    let submit = {
        let state = state.clone();
        Callback::from(move |form: FormInput| {
            let state = state.clone();
            let advice = advice.clone();
            state.dispatch(SubmissionAction::Started);

            spawn_local(async move {
                let result = fetch_advice(&form).await;
                match &result {
                    Ok(response) => {
                        gloo::console::log!(format!(
                            "Received advice with {} metrics and {} research sources",
                            response.metrics.len(),
                            response.research_sources.len()
                        ));
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Error fetching advice: {e}"));
                    }
                }
                state.dispatch(complete_submission(&advice, result));
            });
        })
    };

    SubmissionHandle {
        in_flight: state.in_flight,
        error: state.error.clone(),
        submit,
    }
}
