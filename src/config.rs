use shakenstir_core::{UploadWidgetConfig, WidgetSettings};
use web_sys::Document;

pub(crate) const META_CLOUD_NAME: &str = "shakenstir:cloud-name";
pub(crate) const META_UPLOAD_PRESET: &str = "shakenstir:upload-preset";
pub(crate) const META_UPLOAD_SOURCES: &str = "shakenstir:upload-sources";

/// Widget config from compiled defaults, then build-time env, then page `<meta>` tags.
/// A layer that fails to validate is skipped.
pub(crate) fn load_widget_config(document: &Document) -> UploadWidgetConfig {
    let mut config = UploadWidgetConfig::default();
    for (label, layer) in [
        ("build env", build_settings()),
        ("page meta", page_settings(document)),
    ] {
        if layer.is_empty() {
            continue;
        }
        match layer.apply(&config) {
            Ok(next) => config = next,
            Err(err) => {
                gloo::console::warn!("ignoring upload widget settings", label, err.to_string());
            }
        }
    }
    config
}

fn build_settings() -> WidgetSettings {
    WidgetSettings {
        cloud_name: option_env!("SHAKENSTIR_CLOUD_NAME").map(str::to_string),
        upload_preset: option_env!("SHAKENSTIR_UPLOAD_PRESET").map(str::to_string),
        sources: option_env!("SHAKENSTIR_UPLOAD_SOURCES").map(str::to_string),
    }
}

pub(crate) fn page_settings(document: &Document) -> WidgetSettings {
    WidgetSettings {
        cloud_name: meta_content(document, META_CLOUD_NAME),
        upload_preset: meta_content(document, META_UPLOAD_PRESET),
        sources: meta_content(document, META_UPLOAD_SOURCES),
    }
}

fn meta_content(document: &Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{name}\"]");
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shakenstir_core::UploadSource;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("document available")
    }

    fn add_meta(document: &Document, name: &str, content: &str) -> web_sys::Element {
        let meta = document.create_element("meta").expect("create meta");
        meta.set_attribute("name", name).expect("name");
        meta.set_attribute("content", content).expect("content");
        document
            .body()
            .expect("body available")
            .append_child(&meta)
            .expect("append meta");
        meta
    }

    #[wasm_bindgen_test]
    fn meta_tags_override_defaults() {
        let document = document();
        let metas = [
            add_meta(&document, META_CLOUD_NAME, "bar-cart"),
            add_meta(&document, META_UPLOAD_SOURCES, "url"),
        ];
        let config = load_widget_config(&document);
        for meta in metas {
            meta.remove();
        }
        assert_eq!(config.cloud_name(), "bar-cart");
        assert_eq!(config.sources(), &[UploadSource::Url]);
    }

    #[wasm_bindgen_test]
    fn invalid_meta_layer_is_skipped() {
        let document = document();
        let metas = [
            add_meta(&document, META_CLOUD_NAME, "bar-cart"),
            add_meta(&document, META_UPLOAD_SOURCES, "camera"),
        ];
        let settings = page_settings(&document);
        let config = load_widget_config(&document);
        for meta in metas {
            meta.remove();
        }
        assert_eq!(settings.cloud_name.as_deref(), Some("bar-cart"));
        let expected = build_settings()
            .apply(&UploadWidgetConfig::default())
            .unwrap_or_default();
        assert_eq!(config, expected);
    }
}
