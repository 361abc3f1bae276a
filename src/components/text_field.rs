use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let callback = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <div class="form-field">
            <label>
                <span class="form-label">{&props.label}</span>
                <input
                    type="text"
                    class="form-input"
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    oninput={on_input}
                    required={props.required}
                />
            </label>
        </div>
    }
}
