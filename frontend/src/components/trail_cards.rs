use std::rc::Rc;

use trail_guardian_lib::{
    display::{format_distance, format_score},
    trail::Trail,
};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct TrailCardsProps {
    pub trails: Rc<Vec<Trail>>,
}

#[function_component]
pub fn TrailCards(props: &TrailCardsProps) -> Html {
    html! {
        <div class="trails-grid">
            { for props.trails.iter().map(|trail| html! {
                <TrailCard key={trail.id} trail={trail.clone()} />
            }) }
        </div>
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct TrailCardProps {
    pub trail: Trail,
}

#[function_component]
pub fn TrailCard(props: &TrailCardProps) -> Html {
    let trail = &props.trail;

    html! {
        <div class="trail-card">
            <h3>{&trail.name}</h3>
            <p>
                <strong>{"Threat Level:"}</strong>{" "}
                <span class="threat-score">{format_score(trail.threat_score)}</span>
            </p>
            <p>{&trail.description}</p>
            <p><strong>{"Difficulty:"}</strong>{" "}{&trail.difficulty}</p>
            <p><strong>{"Distance:"}</strong>{" "}{format_distance(trail.length_miles)}</p>
            <p><strong>{"Active Fires:"}</strong>{" "}{trail.active_fires_nearby.to_string()}</p>
        </div>
    }
}
