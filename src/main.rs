use yew::prelude::*;

use farm_advisor::components::{Dashboard, InputForm};
use farm_advisor::hooks::use_advice::AdviceProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <AdviceProvider>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"🌿 Sustainable Farming Assistant"}</h1>
                </header>

                <main class="app-main">
                    <section class="form-section">
                        <InputForm />
                    </section>

                    <section class="advice-section-container">
                        <Dashboard />
                    </section>
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </AdviceProvider>
    }
}

fn main() {
    gloo::console::log!("Starting farming advisor...");
    yew::Renderer::<App>::new().render();
}
