use std::rc::Rc;
use yew::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::loader::Loader;
use crate::components::select_field::{SelectField, choice_options};
use crate::components::text_field::TextField;
use crate::hooks::use_submission::use_submission;
use crate::models::form::{FormField, FormInput, Season, SoilType, WaterAvailability};

/// Sets one field of the form draft.
pub struct FieldUpdate(pub FormField, pub String);

impl Reducible for FormInput {
    type Action = FieldUpdate;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let FieldUpdate(field, value) = action;
        let mut next = (*self).clone();
        next.set(field, value);
        Rc::new(next)
    }
}

/// Farming-context form; submits to the backend and shows progress and errors
#[function_component(InputForm)]
pub fn input_form() -> Html {
    let form = use_reducer(FormInput::default);
    let submission = use_submission();

    let setter = |field: FormField| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(FieldUpdate(field, value)))
    };

    let on_submit = {
        let form = form.clone();
        let submit = submission.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_complete() {
                submit.emit((*form).clone());
            }
        })
    };

    let disabled = submission.in_flight || !form.is_complete();
    let button_label = if submission.in_flight {
        "Getting Advice..."
    } else {
        "Get Farming Advice"
    };

    html! {
        <div class="input-form">
            <form onsubmit={on_submit}>
                <TextField
                    label="Location:"
                    value={form.location.clone()}
                    placeholder="e.g., California"
                    on_input={setter(FormField::Location)}
                    required=true
                />
                <TextField
                    label="Crop:"
                    value={form.crop.clone()}
                    placeholder="e.g., Tomatoes"
                    on_input={setter(FormField::Crop)}
                    required=true
                />
                <SelectField
                    label="Soil Type:"
                    prompt="Select Soil Type"
                    value={form.soil_type.clone()}
                    options={choice_options::<SoilType>()}
                    on_change={setter(FormField::SoilType)}
                    required=true
                />
                <SelectField
                    label="Season:"
                    prompt="Select Season"
                    value={form.season.clone()}
                    options={choice_options::<Season>()}
                    on_change={setter(FormField::Season)}
                    required=true
                />
                <SelectField
                    label="Water Availability:"
                    prompt="Select Water Availability"
                    value={form.water_availability.clone()}
                    options={choice_options::<WaterAvailability>()}
                    on_change={setter(FormField::WaterAvailability)}
                    required=true
                />
                <TextField
                    label="Previous Crop (if any):"
                    value={form.previous_crop.clone()}
                    placeholder="e.g., Wheat, None"
                    on_input={setter(FormField::PreviousCrop)}
                />
                <TextField
                    label="Known Pest Issues:"
                    value={form.pest_issues.clone()}
                    placeholder="e.g., Aphids, None"
                    on_input={setter(FormField::PestIssues)}
                />

                <button type="submit" class="submit-button" {disabled}>
                    {button_label}
                </button>
            </form>

            if submission.in_flight {
                <Loader />
            }

            if let Some(message) = submission.error.clone() {
                <ErrorPanel {message} />
            }
        </div>
    }
}
