use std::rc::Rc;

use crate::components::{map_component::MapComponent, trail_cards::TrailCards};
use api::FetchError;
use gloo_console::{error, info};
use trail_guardian_lib::{load_state::LoadState, trail::Trail};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod api;
mod components;
mod marker_icons;

enum AppMsg {
    TrailsSettled(Result<Vec<Trail>, FetchError>),
}

struct App {
    state: LoadState,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let cb = ctx.link().callback(AppMsg::TrailsSettled);
        spawn_local(async move {
            cb.emit(api::fetch_trails().await);
        });

        Self {
            state: LoadState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::TrailsSettled(result) => {
                match &result {
                    Ok(trails) => info!(format!("Loaded {} trails", trails.len())),
                    Err(err) => error!(format!("Error fetching trails: {err}")),
                }
                self.state = std::mem::take(&mut self.state).settle(result);
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let render_map = Callback::from(|trails: Rc<Vec<Trail>>| html! { <MapComponent {trails} /> });

        html! {
            <div class="app">
                <header class="app-header">
                    <h1>{"🔥 Trail Guardian Pro"}</h1>
                    <p>{"Real-time Wildfire Threat Scoring"}</p>
                </header>
                <Dashboard state={self.state.clone()} {render_map} />
            </div>
        }
    }
}

#[derive(PartialEq, Properties, Clone)]
struct DashboardProps {
    state: LoadState,
    /// Builds the map for the loaded trails. Kept as a prop so the leaflet
    /// map can be swapped out where there is no DOM.
    render_map: Callback<Rc<Vec<Trail>>, Html>,
}

#[function_component]
fn Dashboard(props: &DashboardProps) -> Html {
    let state = &props.state;
    let fetch_failed = state.fetch_error().is_some().to_string();

    html! {
        <div class="container" data-fetch-error={fetch_failed}>
            if state.is_loading() {
                <p class="loading">{"Loading trails..."}</p>
            } else {
                <>
                    <div class="map-section">
                        {props.render_map.emit(state.trails())}
                    </div>
                    <h2 class="trails-heading">{"Available Trails"}</h2>
                    <TrailCards trails={state.trails()} />
                </>
            }
        </div>
    }
}

fn main() {
    marker_icons::init_default_icon();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    fn map_stub() -> Callback<Rc<Vec<Trail>>, Html> {
        Callback::from(|trails: Rc<Vec<Trail>>| {
            html! { <div class="map-stub" data-markers={trails.len().to_string()} /> }
        })
    }

    async fn render(state: LoadState) -> String {
        LocalServerRenderer::<Dashboard>::with_props(DashboardProps {
            state,
            render_map: map_stub(),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn ridge_trail() -> Trail {
        Trail {
            id: 1,
            name: "Ridge Trail".into(),
            description: "Exposed ridge walk".into(),
            difficulty: "Hard".into(),
            length_miles: 7.5,
            latitude: 40.,
            longitude: -105.,
            threat_score: 85.,
            active_fires_nearby: 2,
            last_fire_report_distance_km: 4.2,
        }
    }

    #[tokio::test]
    async fn loading_shows_placeholder_only() {
        let html = render(LoadState::Loading).await;

        assert!(html.contains("Loading trails..."));
        assert!(html.contains("data-fetch-error=\"false\""));
        assert!(!html.contains("map-section"));
        assert!(!html.contains("map-stub"));
        assert!(!html.contains("trails-grid"));
    }

    #[tokio::test]
    async fn failed_fetch_renders_empty_map_and_grid() {
        let state = LoadState::Loading.settle(Err::<Vec<Trail>, _>("connection refused"));
        let html = render(state).await;

        assert!(!html.contains("Loading trails..."));
        assert!(html.contains("data-fetch-error=\"true\""));
        assert!(html.contains("data-markers=\"0\""));
        assert!(html.contains("trails-grid"));
        assert!(!html.contains("trail-card"));
        // no banner: the message only lives in state
        assert!(!html.contains("connection refused"));
    }

    #[tokio::test]
    async fn empty_response_renders_empty_map_and_grid() {
        let state = LoadState::Loading.settle(Ok::<_, String>(Vec::new()));
        let html = render(state).await;

        assert!(!html.contains("Loading trails..."));
        assert!(html.contains("data-fetch-error=\"false\""));
        assert!(html.contains("data-markers=\"0\""));
        assert!(!html.contains("trail-card"));
    }

    #[tokio::test]
    async fn ridge_trail_renders_one_marker_and_one_card() {
        let state = LoadState::Loading.settle(Ok::<_, String>(vec![ridge_trail()]));
        let html = render(state).await;

        assert!(html.contains("data-markers=\"1\""));
        assert_eq!(html.matches("class=\"trail-card\"").count(), 1);
        assert!(html.contains("<h3>Ridge Trail</h3>"));
        assert!(html.contains("85/100"));
    }
}
