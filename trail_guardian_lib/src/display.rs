//! Text and markup shown for a trail on the map and in the card grid.

use crate::{
    threat::{ThreatLevel, ThreatTier},
    trail::Trail,
};

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// "85/100"
pub fn format_score(score: f64) -> String {
    format!("{}/100", score)
}

/// "7.5 miles"
pub fn format_distance(length_miles: f64) -> String {
    format!("{} miles", length_miles)
}

/// Circular badge used as the marker icon.
pub fn marker_badge_html(score: f64) -> String {
    format!(
        "<div class=\"threat-marker\" style=\"background-color: {}; width: 30px; height: 30px; border-radius: 50%; \
         display: flex; align-items: center; justify-content: center; color: white; font-weight: bold; \
         border: 2px solid white;\">{}</div>",
        ThreatTier::from_score(score).color(),
        score
    )
}

pub fn popup_html(trail: &Trail) -> String {
    let level = ThreatLevel::from_score(trail.threat_score);
    format!(
        "<div class=\"popup-content\"><h3>{}</h3><p>{}</p>\
         <p><strong>Difficulty:</strong> {}</p>\
         <p><strong>Distance:</strong> {}</p>\
         <p><strong>Threat Score:</strong> <span class=\"threat-badge\">{}</span></p>\
         <p><strong>Active Fires:</strong> {}</p>\
         <p class=\"recommendation\"><strong>{}:</strong> {}</p></div>",
        escape_html(&trail.name),
        escape_html(&trail.description),
        escape_html(&trail.difficulty),
        format_distance(trail.length_miles),
        format_score(trail.threat_score),
        trail.active_fires_nearby,
        level,
        level.recommendation(),
    )
}

/// Everything the map needs to draw one trail.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub trail_id: i64,
    pub position: (f64, f64),
    pub tier: ThreatTier,
    pub badge_html: String,
    pub popup_html: String,
}

impl MarkerSpec {
    pub fn for_trail(trail: &Trail) -> Self {
        Self {
            trail_id: trail.id,
            position: trail.position(),
            tier: ThreatTier::from_score(trail.threat_score),
            badge_html: marker_badge_html(trail.threat_score),
            popup_html: popup_html(trail),
        }
    }
}

/// One marker per trail, in list order.
pub fn marker_specs<'a>(trails: impl IntoIterator<Item = &'a Trail>) -> Vec<MarkerSpec> {
    trails.into_iter().map(MarkerSpec::for_trail).collect()
}
