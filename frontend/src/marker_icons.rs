use std::sync::Once;

use gloo_console::error;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
use web_sys::js_sys::{Object, Reflect};

const LEAFLET_IMAGES: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["L", "Icon", "Default"], js_name = mergeOptions)]
    fn merge_default_icon_options(options: &JsValue);
}

static INIT: Once = Once::new();

/// Options merged into `L.Icon.Default`.
///
/// Leaflet builds each image url as `imagePath + <file>`, so the file names
/// must stay relative.
fn default_icon_options() -> [(&'static str, &'static str); 4] {
    [
        ("imagePath", LEAFLET_IMAGES),
        ("iconUrl", "marker-icon.png"),
        ("iconRetinaUrl", "marker-icon-2x.png"),
        ("shadowUrl", "marker-shadow.png"),
    ]
}

/// Point leaflet's shared default marker icon at the hosted images.
///
/// Affects every default marker on the page, so it runs once from `main`
/// before anything is rendered.
pub fn init_default_icon() {
    INIT.call_once(|| {
        let options = Object::new();

        for (key, value) in default_icon_options() {
            if let Err(err) = Reflect::set(&options, &key.into(), &value.into()) {
                error!("Failed to set default icon option", key, err);
                return;
            }
        }

        merge_default_icon_options(&options);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_urls_resolve_against_image_path() {
        let options = default_icon_options();
        let (key, image_path) = options[0];
        assert_eq!(key, "imagePath");
        assert!(image_path.ends_with('/'));

        for (key, file) in &options[1..] {
            assert!(!file.contains("://"), "{key} must be relative to imagePath");
            let url = format!("{image_path}{file}");
            assert_eq!(url.matches("https://").count(), 1);
        }
    }
}
