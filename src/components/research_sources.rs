use yew::prelude::*;

use crate::models::advice::ResearchLink;

#[derive(Properties, PartialEq)]
pub struct ResearchSourcesProps {
    pub links: Vec<ResearchLink>,
}

/// Links to the research the advice is based on
#[function_component(ResearchSources)]
pub fn research_sources(props: &ResearchSourcesProps) -> Html {
    html! {
        <div class="advice-section research-sources">
            <h2>{"Research Sources"}</h2>
            <ul>
                {
                    props.links.iter().map(|link| html! {
                        <li>
                            <a href={link.href.clone()} target="_blank" rel="noopener noreferrer">
                                {&link.text}
                            </a>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
