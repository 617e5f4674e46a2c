use std::{fmt, path::Path};

use anyhow::Context;
use tokio::sync::RwLock;
use trail_guardian_lib::trail::{NewTrail, Trail};

#[derive(Debug, PartialEq)]
pub enum StoreError {
    InvalidTrail(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidTrail(reason) => write!(f, "invalid trail: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

struct Inner {
    trails: Vec<Trail>,
    next_id: i64,
}

/// In-memory trail table. Ids are handed out sequentially from 1 and trails
/// are listed in insertion order.
pub struct TrailStore {
    inner: RwLock<Inner>,
}

impl Default for TrailStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                trails: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn list(&self) -> Vec<Trail> {
        self.inner.read().await.trails.clone()
    }

    pub async fn get(&self, trail_id: i64) -> Option<Trail> {
        self.inner
            .read()
            .await
            .trails
            .iter()
            .find(|trail| trail.id == trail_id)
            .cloned()
    }

    pub async fn insert(&self, new_trail: NewTrail) -> Result<Trail, StoreError> {
        validate(&new_trail)?;

        let mut inner = self.inner.write().await;
        let trail = Trail::new(inner.next_id, new_trail);
        inner.next_id += 1;
        inner.trails.push(trail.clone());

        Ok(trail)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.trails.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn validate(trail: &NewTrail) -> Result<(), StoreError> {
    if !(0. ..=100.).contains(&trail.threat_score) {
        return Err(StoreError::InvalidTrail(format!(
            "threat_score must be between 0 and 100, got {}",
            trail.threat_score
        )));
    }
    if !(-90. ..=90.).contains(&trail.latitude) {
        return Err(StoreError::InvalidTrail(format!("latitude out of range: {}", trail.latitude)));
    }
    if !(-180. ..=180.).contains(&trail.longitude) {
        return Err(StoreError::InvalidTrail(format!("longitude out of range: {}", trail.longitude)));
    }
    Ok(())
}

/// Read a JSON array of trails to preload into the store.
pub async fn load_seed(path: &Path) -> anyhow::Result<Vec<NewTrail>> {
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    serde_json::from_str(&body).with_context(|| format!("Seed file {} is not a list of trails", path.display()))
}
