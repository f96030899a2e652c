pub mod controller;
pub mod error;
pub mod markers;
pub mod ui;
pub mod upload;
pub mod validation;

pub use controller::FormController;
pub use error::{BridgeError, ConfigError};
pub use markers::UiRole;
pub use ui::{ClassList, ConstraintForm, ImageSource, Ui, UiBindings, ValueField};
pub use upload::{
    UploadCallback, UploadEvent, UploadResult, UploadSource, UploadWidget, UploadWidgetConfig,
    UploadWidgetFactory, WidgetSettings,
};
pub use validation::{FieldValidity, SubmitVerdict};
