use yew::prelude::*;

use crate::models::advice::MetricCard;

#[derive(Properties, PartialEq)]
pub struct MetricsGridProps {
    pub cards: Vec<MetricCard>,
}

#[function_component(MetricsGrid)]
pub fn metrics_grid(props: &MetricsGridProps) -> Html {
    if props.cards.is_empty() {
        return html! {};
    }

    html! {
        <div class="summary-grid metrics-grid">
            {
                props.cards.iter().map(|card| html! {
                    <div class="summary-item" key={card.key.clone()}>
                        <h3>{&card.label}</h3>
                        <p class="summary-value">{&card.value}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
