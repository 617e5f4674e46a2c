use std::{fmt::Display, rc::Rc};

use crate::trail::Trail;

/// Lifecycle of the one trail fetch made per page load.
///
/// `Loading` settles exactly once, into `Loaded` or `Failed`. There is no way
/// back to `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Rc<Vec<Trail>>),
    Failed(String),
}

impl LoadState {
    pub fn settle<E: Display>(self, result: Result<Vec<Trail>, E>) -> Self {
        match self {
            LoadState::Loading => match result {
                Ok(trails) => LoadState::Loaded(Rc::new(trails)),
                Err(err) => LoadState::Failed(err.to_string()),
            },
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Trails to render. Empty while loading and after a failed fetch.
    pub fn trails(&self) -> Rc<Vec<Trail>> {
        match self {
            LoadState::Loaded(trails) => trails.clone(),
            _ => Rc::new(Vec::new()),
        }
    }

    pub fn fetch_error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(id: i64) -> Trail {
        Trail {
            id,
            name: format!("Trail {id}"),
            description: String::new(),
            difficulty: "Moderate".into(),
            length_miles: 1.,
            latitude: 0.,
            longitude: 0.,
            threat_score: 50.,
            active_fires_nearby: 0,
            last_fire_report_distance_km: 0.,
        }
    }

    #[test]
    fn starts_loading_with_no_trails() {
        let state = LoadState::default();
        assert!(state.is_loading());
        assert!(state.trails().is_empty());
        assert_eq!(state.fetch_error(), None);
    }

    #[test]
    fn success_replaces_list() {
        let state = LoadState::Loading.settle(Ok::<_, String>(vec![trail(1), trail(2)]));
        assert!(!state.is_loading());
        assert_eq!(state.trails().len(), 2);
        assert_eq!(state.fetch_error(), None);
    }

    #[test]
    fn empty_response_is_loaded_not_failed() {
        let state = LoadState::Loading.settle(Ok::<_, String>(Vec::new()));
        assert_eq!(state, LoadState::Loaded(Rc::new(Vec::new())));
    }

    #[test]
    fn failure_leaves_list_empty() {
        let state = LoadState::Loading.settle(Err::<Vec<Trail>, _>("connection refused"));
        assert!(!state.is_loading());
        assert!(state.trails().is_empty());
        assert_eq!(state.fetch_error(), Some("connection refused"));
    }

    #[test]
    fn settles_only_once() {
        let loaded = LoadState::Loading.settle(Ok::<_, String>(vec![trail(1)]));
        let again = loaded.clone().settle(Err::<Vec<Trail>, _>("late failure"));
        assert_eq!(again, loaded);

        let failed = LoadState::Loading.settle(Err::<Vec<Trail>, _>("boom"));
        let again = failed.clone().settle(Ok::<_, String>(vec![trail(1)]));
        assert_eq!(again, failed);
    }
}
