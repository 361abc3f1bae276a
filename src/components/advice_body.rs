use yew::prelude::*;

use crate::models::advice::AdviceSection;

#[derive(Properties, PartialEq)]
pub struct AdviceBodyProps {
    pub sections: Vec<AdviceSection>,
}

#[function_component(AdviceBody)]
pub fn advice_body(props: &AdviceBodyProps) -> Html {
    props
        .sections
        .iter()
        .map(|section| {
            html! {
                <div class="advice-section">
                    <h2>{&section.title}</h2>
                    <ul>
                        { for section.items.iter().map(|item| html! { <li>{item}</li> }) }
                    </ul>
                </div>
            }
        })
        .collect::<Html>()
}
