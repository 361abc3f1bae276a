use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::form::Choice;

/// One `<option>` of a select field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Options for every variant of a choice enum, in display order.
pub fn choice_options<T: Choice>() -> Vec<SelectOption> {
    T::all()
        .iter()
        .map(|c| SelectOption {
            value: c.value(),
            label: c.label(),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    /// Text of the leading empty option, e.g. "Select Season"
    pub prompt: AttrValue,
    pub value: AttrValue,
    pub options: Vec<SelectOption>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub required: bool,
}

/// Labelled dropdown over a fixed set of options
#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <div class="form-field">
            <label>
                <span class="form-label">{&props.label}</span>
                <select
                    class="form-select"
                    onchange={on_change}
                    required={props.required}
                >
                    <option value="" selected={props.value.is_empty()}>{&props.prompt}</option>
                    {
                        props.options.iter().map(|option| {
                            let selected = option.value == props.value.as_str();
                            html! {
                                <option value={option.value} {selected}>{option.label}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </label>
        </div>
    }
}
