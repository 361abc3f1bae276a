use yew::prelude::*;

use crate::components::advice_body::AdviceBody;
use crate::components::metrics_grid::MetricsGrid;
use crate::components::research_sources::ResearchSources;
use crate::hooks::use_advice::use_advice;

/// Renders the latest advice: metrics, research sources and the sectioned body
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let state = use_advice().read();

    let Some(response) = state.displayed() else {
        return html! {
            <div class="placeholder">
                <p>{"Use the form above to get expert farming advice based on your crop and region."}</p>
            </div>
        };
    };

    html! {
        <div class="dashboard">
            <MetricsGrid cards={response.metric_cards()} />
            <div class="advice-panel">
                if let Some(links) = response.research_links() {
                    <ResearchSources {links} />
                }
                <AdviceBody sections={response.sections()} />
            </div>
        </div>
    }
}
