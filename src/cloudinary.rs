use js_sys::{Function, Object, Reflect};
use shakenstir_core::{
    BridgeError, UploadCallback, UploadEvent, UploadWidget, UploadWidgetConfig, UploadWidgetFactory,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

const CLOUDINARY_GLOBAL: &str = "cloudinary";
const CREATE_METHOD: &str = "createUploadWidget";
const OPEN_METHOD: &str = "open";

/// Upload widgets built from the hosted `cloudinary` script's global.
pub struct CloudinaryFactory {
    global: Object,
}

impl CloudinaryFactory {
    pub fn from_window() -> Result<Self, BridgeError> {
        let window = web_sys::window().ok_or(BridgeError::FactoryUnavailable)?;
        let value = Reflect::get(&window, &JsValue::from_str(CLOUDINARY_GLOBAL))
            .map_err(|_| BridgeError::FactoryUnavailable)?;
        if value.is_null() || value.is_undefined() {
            return Err(BridgeError::FactoryUnavailable);
        }
        let global = value
            .dyn_into::<Object>()
            .map_err(|_| BridgeError::FactoryUnavailable)?;
        Ok(Self { global })
    }
}

impl UploadWidgetFactory for CloudinaryFactory {
    fn create_upload_widget(
        &self,
        config: &UploadWidgetConfig,
        callback: UploadCallback,
    ) -> Result<Box<dyn UploadWidget>, BridgeError> {
        let create = method(&self.global, CREATE_METHOD).ok_or(BridgeError::FactoryUnavailable)?;
        let options = config_to_js(config)?;
        let on_result = Closure::wrap(Box::new(move |error: JsValue, result: JsValue| {
            callback(decode_callback(&error, &result));
        }) as Box<dyn FnMut(JsValue, JsValue)>);
        let handle = create
            .call2(&self.global, &options, on_result.as_ref())
            .map_err(|err| BridgeError::Create(js_err(err)))?;
        let handle = handle
            .dyn_into::<Object>()
            .map_err(|_| BridgeError::Create("widget handle is not an object".to_string()))?;
        Ok(Box::new(CloudinaryWidget {
            handle,
            _on_result: on_result,
        }))
    }
}

pub struct CloudinaryWidget {
    handle: Object,
    _on_result: Closure<dyn FnMut(JsValue, JsValue)>,
}

impl UploadWidget for CloudinaryWidget {
    fn open(&self) -> Result<(), BridgeError> {
        let open = method(&self.handle, OPEN_METHOD)
            .ok_or_else(|| BridgeError::Open("widget has no open()".to_string()))?;
        open.call0(&self.handle)
            .map(|_| ())
            .map_err(|err| BridgeError::Open(js_err(err)))
    }
}

fn method(target: &Object, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn config_to_js(config: &UploadWidgetConfig) -> Result<JsValue, BridgeError> {
    let json = config
        .to_json()
        .map_err(|err| BridgeError::Create(err.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|err| BridgeError::Create(js_err(err)))
}

pub(crate) fn decode_callback(error: &JsValue, result: &JsValue) -> UploadEvent {
    let error = if error.is_truthy() {
        Some(js_err(error.clone()))
    } else {
        None
    };
    if error.is_some() || result.is_null() || result.is_undefined() {
        return UploadEvent::from_callback(error, None);
    }
    match js_sys::JSON::stringify(result)
        .ok()
        .and_then(|json| json.as_string())
    {
        Some(json) => UploadEvent::from_callback(None, Some(&json)),
        None => UploadEvent::Malformed {
            reason: "result is not serializable".to_string(),
        },
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
