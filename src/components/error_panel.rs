use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="status error" role="alert">
            <h2>{"Error:"}</h2>
            <p>{&props.message}</p>
        </div>
    }
}
