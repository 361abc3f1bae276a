use yew::prelude::*;

/// Spinner shown while an advice request is in flight
#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{"Processing your request..."}</p>
        </div>
    }
}
