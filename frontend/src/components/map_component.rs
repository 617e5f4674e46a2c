use std::{collections::HashMap, rc::Rc};

use gloo_console::{error, info};
use gloo_utils::document;
use leaflet::{
    DivIcon, DivIconOptions, Icon, LatLng, Map, MapOptions, Marker, MarkerOptions, Popup,
    PopupOptions, TileLayer, TileLayerOptions,
};
use trail_guardian_lib::{
    display::{marker_specs, MarkerSpec},
    reconcile::plan_markers,
    trail::Trail,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys::Reflect, HtmlElement, Node};
use yew::prelude::*;

/// Geographic center of the contiguous United States.
pub const DEFAULT_CENTER: (f64, f64) = (37.0902, -95.7129);
pub const DEFAULT_ZOOM: f64 = 4.;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub struct MapComponent {
    map: Map,
    container: HtmlElement,
    markers: HashMap<i64, Vec<Marker>>,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub trails: Rc<Vec<Trail>>,
}

impl MapComponent {
    fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }

    fn sync_markers(&mut self, old: &[Trail], new: &[Trail]) {
        let plan = plan_markers(old, new);

        for id in &plan.remove {
            for marker in self.markers.remove(id).unwrap_or_default() {
                marker.remove();
            }
        }

        for (id, trails) in plan.add {
            let markers = marker_specs(trails)
                .iter()
                .map(|spec| {
                    let marker = make_marker(spec);
                    marker.add_to(&self.map);
                    marker
                })
                .collect();
            self.markers.insert(id, markers);
        }

        info!(format!(
            "Markers: {} kept, {} removed, {} on map",
            plan.unchanged.len(),
            plan.remove.len(),
            self.markers.values().map(Vec::len).sum::<usize>()
        ));
    }
}

impl Component for MapComponent {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        let container: HtmlElement = document()
            .create_element("div")
            .expect("document can create a div")
            .unchecked_into();
        container.set_class_name("map");

        let leaflet_map = Map::new_with_element(&container, &MapOptions::default());

        Self {
            map: leaflet_map,
            container,
            markers: HashMap::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let (lat, lng) = DEFAULT_CENTER;
            self.map.set_view(&LatLng::new(lat, lng), DEFAULT_ZOOM);
            add_tile_layer(&self.map);

            let trails = ctx.props().trails.clone();
            self.sync_markers(&[], &trails);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let trails = ctx.props().trails.clone();
        self.sync_markers(&old_props.trails, &trails);

        // The container node never changes, markers are updated in place
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="map-wrapper">
                {self.render_map()}
            </div>
        }
    }
}

fn make_marker(spec: &MarkerSpec) -> Marker {
    let icon_opts = DivIconOptions::new();
    icon_opts.set_html(spec.badge_html.clone().into());
    let icon: Icon = DivIcon::new(&icon_opts).unchecked_into();

    let marker_opts = MarkerOptions::new();
    marker_opts.set_icon(icon);

    let (lat, lng) = spec.position;
    let marker = Marker::new_with_options(&LatLng::new(lat, lng), &marker_opts);

    let popup = Popup::new(&PopupOptions::default(), None);
    popup.set_content(&spec.popup_html.clone().into());
    marker.bind_popup(&popup);

    marker
}

fn add_tile_layer(map: &Map) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    if let Err(err) = Reflect::set(
        &opts,
        &JsValue::from_str("attribution"),
        &JsValue::from_str(TILE_ATTRIBUTION),
    ) {
        error!("Failed to set tile attribution", err);
    }
    TileLayer::new_options(TILE_URL, &opts).add_to(map);
}
