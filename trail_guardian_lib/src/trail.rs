use serde::{Deserialize, Serialize};

/// A hiking trail as served by `/api/v1/trails/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Trail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub length_miles: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub threat_score: f64,
    pub active_fires_nearby: u32,
    #[serde(default)]
    pub last_fire_report_distance_km: f64,
}

/// Body of a trail creation request. Same fields as [`Trail`] minus the id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewTrail {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub length_miles: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub threat_score: f64,
    #[serde(default)]
    pub active_fires_nearby: u32,
    #[serde(default)]
    pub last_fire_report_distance_km: f64,
}

impl Trail {
    pub fn new(id: i64, new_trail: NewTrail) -> Self {
        Self {
            id,
            name: new_trail.name,
            description: new_trail.description,
            difficulty: new_trail.difficulty,
            length_miles: new_trail.length_miles,
            latitude: new_trail.latitude,
            longitude: new_trail.longitude,
            threat_score: new_trail.threat_score,
            active_fires_nearby: new_trail.active_fires_nearby,
            last_fire_report_distance_km: new_trail.last_fire_report_distance_km,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Parse a response body that must be a JSON array of trails at the top level.
pub fn parse_trail_list(body: &str) -> Result<Vec<Trail>, serde_json::Error> {
    serde_json::from_str(body)
}
