use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BridgeError, ConfigError};

pub const DEFAULT_CLOUD_NAME: &str = "dx82dshakenstir";
pub const DEFAULT_UPLOAD_PRESET: &str = "yxesuzpw";
pub const SUCCESS_EVENT: &str = "success";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadSource {
    Local,
    Url,
}

impl UploadSource {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("local") {
            Some(UploadSource::Local)
        } else if value.eq_ignore_ascii_case("url") {
            Some(UploadSource::Url)
        } else {
            None
        }
    }
}

/// Comma separated, case-insensitive. Duplicates are dropped, order is kept.
pub fn parse_sources(raw: &str) -> Result<Vec<UploadSource>, ConfigError> {
    let mut sources = Vec::new();
    for chunk in raw.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let source = UploadSource::parse(chunk)
            .ok_or_else(|| ConfigError::UnknownSource(chunk.to_string()))?;
        if !sources.contains(&source) {
            sources.push(source);
        }
    }
    if sources.is_empty() {
        return Err(ConfigError::NoSources);
    }
    Ok(sources)
}

/// Options handed to the widget factory, serialized in the widget's own key casing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadWidgetConfig {
    cloud_name: String,
    upload_preset: String,
    sources: Vec<UploadSource>,
}

impl UploadWidgetConfig {
    pub fn new(
        cloud_name: &str,
        upload_preset: &str,
        sources: Vec<UploadSource>,
    ) -> Result<Self, ConfigError> {
        let cloud_name = cloud_name.trim();
        if cloud_name.is_empty() {
            return Err(ConfigError::EmptyCloudName);
        }
        let upload_preset = upload_preset.trim();
        if upload_preset.is_empty() {
            return Err(ConfigError::EmptyUploadPreset);
        }
        if sources.is_empty() {
            return Err(ConfigError::NoSources);
        }
        Ok(Self {
            cloud_name: cloud_name.to_string(),
            upload_preset: upload_preset.to_string(),
            sources,
        })
    }

    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    pub fn upload_preset(&self) -> &str {
        &self.upload_preset
    }

    pub fn sources(&self) -> &[UploadSource] {
        &self.sources
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for UploadWidgetConfig {
    fn default() -> Self {
        Self {
            cloud_name: DEFAULT_CLOUD_NAME.to_string(),
            upload_preset: DEFAULT_UPLOAD_PRESET.to_string(),
            sources: vec![UploadSource::Local, UploadSource::Url],
        }
    }
}

/// One configuration layer. Unset or blank values fall through to the base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetSettings {
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
    pub sources: Option<String>,
}

impl WidgetSettings {
    pub fn is_empty(&self) -> bool {
        non_blank(self.cloud_name.as_deref()).is_none()
            && non_blank(self.upload_preset.as_deref()).is_none()
            && non_blank(self.sources.as_deref()).is_none()
    }

    pub fn apply(&self, base: &UploadWidgetConfig) -> Result<UploadWidgetConfig, ConfigError> {
        let cloud_name = non_blank(self.cloud_name.as_deref()).unwrap_or(base.cloud_name());
        let upload_preset =
            non_blank(self.upload_preset.as_deref()).unwrap_or(base.upload_preset());
        let sources = match non_blank(self.sources.as_deref()) {
            Some(raw) => parse_sources(raw)?,
            None => base.sources().to_vec(),
        };
        UploadWidgetConfig::new(cloud_name, upload_preset, sources)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// The `result` argument of the widget callback.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub info: Value,
}

impl UploadResult {
    pub fn secure_url(&self) -> Option<&str> {
        self.info.get("secure_url").and_then(Value::as_str)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UploadEvent {
    Uploaded { secure_url: String },
    Failed { message: String },
    /// Any non-success widget event (queue start, display change, ...).
    Progress { event: String },
    Malformed { reason: String },
}

impl UploadEvent {
    /// Classifies a callback from its error text (set only when the error was
    /// truthy) and the JSON text of its result.
    pub fn from_callback(error: Option<String>, result_json: Option<&str>) -> Self {
        if let Some(message) = error {
            return UploadEvent::Failed { message };
        }
        let Some(raw) = result_json else {
            return UploadEvent::Malformed {
                reason: "missing result".to_string(),
            };
        };
        match serde_json::from_str::<UploadResult>(raw) {
            Ok(result) => Self::from_result(result),
            Err(err) => UploadEvent::Malformed {
                reason: err.to_string(),
            },
        }
    }

    pub fn from_result(result: UploadResult) -> Self {
        if result.event != SUCCESS_EVENT {
            return UploadEvent::Progress {
                event: result.event,
            };
        }
        match result.secure_url() {
            Some(url) => UploadEvent::Uploaded {
                secure_url: url.to_string(),
            },
            None => UploadEvent::Malformed {
                reason: "success event without secure_url".to_string(),
            },
        }
    }

    pub fn secure_url(&self) -> Option<&str> {
        match self {
            UploadEvent::Uploaded { secure_url } => Some(secure_url),
            _ => None,
        }
    }
}

pub type UploadCallback = Rc<dyn Fn(UploadEvent)>;

pub trait UploadWidget {
    fn open(&self) -> Result<(), BridgeError>;
}

/// Source of upload widgets; the browser layer backs it with the hosted widget script.
pub trait UploadWidgetFactory {
    fn create_upload_widget(
        &self,
        config: &UploadWidgetConfig,
        callback: UploadCallback,
    ) -> Result<Box<dyn UploadWidget>, BridgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes_in_widget_casing() {
        let json = UploadWidgetConfig::default().to_json().expect("json");
        assert_eq!(
            json,
            r#"{"cloudName":"dx82dshakenstir","uploadPreset":"yxesuzpw","sources":["local","url"]}"#
        );
    }

    #[test]
    fn config_rejects_blank_fields() {
        assert_eq!(
            UploadWidgetConfig::new("  ", "preset", vec![UploadSource::Local]),
            Err(ConfigError::EmptyCloudName)
        );
        assert_eq!(
            UploadWidgetConfig::new("cloud", "", vec![UploadSource::Local]),
            Err(ConfigError::EmptyUploadPreset)
        );
        assert_eq!(
            UploadWidgetConfig::new("cloud", "preset", Vec::new()),
            Err(ConfigError::NoSources)
        );
    }

    #[test]
    fn sources_parse_dedupes_and_keeps_order() {
        let sources = parse_sources(" URL, local ,url,,").expect("sources");
        assert_eq!(sources, vec![UploadSource::Url, UploadSource::Local]);
        assert_eq!(
            parse_sources("local,camera"),
            Err(ConfigError::UnknownSource("camera".to_string()))
        );
        assert_eq!(parse_sources(" , "), Err(ConfigError::NoSources));
    }

    #[test]
    fn settings_layer_over_base() {
        let base = UploadWidgetConfig::default();
        let settings = WidgetSettings {
            cloud_name: Some(" bar-cart ".to_string()),
            upload_preset: Some("   ".to_string()),
            sources: Some("url".to_string()),
        };
        assert!(!settings.is_empty());
        let config = settings.apply(&base).expect("config");
        assert_eq!(config.cloud_name(), "bar-cart");
        assert_eq!(config.upload_preset(), DEFAULT_UPLOAD_PRESET);
        assert_eq!(config.sources(), &[UploadSource::Url]);
    }

    #[test]
    fn empty_settings_keep_base() {
        let settings = WidgetSettings {
            cloud_name: Some(String::new()),
            ..WidgetSettings::default()
        };
        assert!(settings.is_empty());
        let base = UploadWidgetConfig::default();
        assert_eq!(settings.apply(&base), Ok(base));
    }

    #[test]
    fn success_callback_yields_secure_url() {
        let event = UploadEvent::from_callback(
            None,
            Some(r#"{"event":"success","info":{"secure_url":"https://x/y.png","bytes":12}}"#),
        );
        assert_eq!(
            event,
            UploadEvent::Uploaded {
                secure_url: "https://x/y.png".to_string()
            }
        );
        assert_eq!(event.secure_url(), Some("https://x/y.png"));
    }

    #[test]
    fn error_wins_over_result() {
        let event = UploadEvent::from_callback(
            Some("upload rejected".to_string()),
            Some(r#"{"event":"success","info":{"secure_url":"https://x/y.png"}}"#),
        );
        assert_eq!(
            event,
            UploadEvent::Failed {
                message: "upload rejected".to_string()
            }
        );
        assert_eq!(event.secure_url(), None);
    }

    #[test]
    fn other_events_are_progress() {
        let event =
            UploadEvent::from_callback(None, Some(r#"{"event":"queues-start","info":"x"}"#));
        assert_eq!(
            event,
            UploadEvent::Progress {
                event: "queues-start".to_string()
            }
        );
        let event = UploadEvent::from_callback(None, Some("{}"));
        assert_eq!(
            event,
            UploadEvent::Progress {
                event: String::new()
            }
        );
    }

    #[test]
    fn unusable_results_are_malformed() {
        assert!(matches!(
            UploadEvent::from_callback(None, None),
            UploadEvent::Malformed { .. }
        ));
        assert!(matches!(
            UploadEvent::from_callback(None, Some(r#""just text""#)),
            UploadEvent::Malformed { .. }
        ));
        assert!(matches!(
            UploadEvent::from_callback(
                None,
                Some(r#"{"event":"success","info":{"secure_url":7}}"#)
            ),
            UploadEvent::Malformed { .. }
        ));
    }
}
