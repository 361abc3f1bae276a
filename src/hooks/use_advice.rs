use std::rc::Rc;
use yew::prelude::*;

use crate::models::advice::{AdviceResponse, Metrics};

/// The most recent advice received from the backend.
///
/// Starts empty and is replaced wholesale by every successful request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdviceState {
    latest: Option<Rc<AdviceResponse>>,
    revision: u64,
}

impl AdviceState {
    /// Returns the latest response, if any request has completed
    pub fn latest(&self) -> Option<&Rc<AdviceResponse>> {
        self.latest.as_ref()
    }

    /// The response to render, or `None` while the placeholder should show
    pub fn displayed(&self) -> Option<&Rc<AdviceResponse>> {
        self.latest().filter(|r| r.advice_text().is_some())
    }

    /// Number of updates applied since start
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

pub enum AdviceAction {
    Update(AdviceResponse),
}

impl Reducible for AdviceState {
    type Action = AdviceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AdviceAction::Update(response) => Rc::new(Self {
                latest: Some(Rc::new(response)),
                revision: self.revision + 1,
            }),
        }
    }
}

/// Handle shared through the context: a read view plus the single update operation.
#[derive(Clone, PartialEq)]
pub struct AdviceContext {
    state: UseReducerHandle<AdviceState>,
}

impl AdviceContext {
    pub fn read(&self) -> AdviceState {
        (*self.state).clone()
    }
}

/// Write side of the advice state.
pub trait AdviceSink {
    /// Replaces advice, metrics and sources in one step.
    fn update(&self, advice: String, metrics: Metrics, sources: Vec<String>);
}

impl AdviceSink for AdviceContext {
    fn update(&self, advice: String, metrics: Metrics, sources: Vec<String>) {
        self.state.dispatch(AdviceAction::Update(AdviceResponse::new(
            advice, metrics, sources,
        )));
    }
}

#[derive(Properties, PartialEq)]
pub struct AdviceProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the advice state and exposes it to descendants.
#[function_component(AdviceProvider)]
pub fn advice_provider(props: &AdviceProviderProps) -> Html {
    let state = use_reducer(AdviceState::default);
    let context = AdviceContext { state };

    html! {
        <ContextProvider<AdviceContext> {context}>
            {props.children.clone()}
        </ContextProvider<AdviceContext>>
    }
}

/// Custom hook for reading and updating the shared advice state
#[hook]
pub fn use_advice() -> AdviceContext {
    use_context::<AdviceContext>().expect("use_advice must be used within an AdviceProvider")
}
