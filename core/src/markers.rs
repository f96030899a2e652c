pub const NEEDS_VALIDATION_CLASS: &str = "needs-validation";
pub const WAS_VALIDATED_CLASS: &str = "was-validated";
pub const IS_VALID_CLASS: &str = "is-valid";
pub const IS_INVALID_CLASS: &str = "is-invalid";
pub const CARD_CLASS: &str = "cocktail-cards";
pub const CARD_HOVER_CLASS: &str = "card-hover";

pub const PASSWORD_ID: &str = "password";
pub const CONFIRM_PASSWORD_ID: &str = "confirm_password";
pub const IMAGE_URL_ID: &str = "cocktail_img_url";
pub const UPLOAD_BUTTON_ID: &str = "img_upload_btn";

/// Logical element roles on a form page. Each maps to one CSS selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiRole {
    GuardedForm,
    Password,
    ConfirmPassword,
    ImageUrl,
    PreviewImage,
    UploadButton,
    Card,
}

impl UiRole {
    pub fn selector(self) -> &'static str {
        match self {
            UiRole::GuardedForm => ".needs-validation",
            UiRole::Password => "#password",
            UiRole::ConfirmPassword => "#confirm_password",
            UiRole::ImageUrl => "#cocktail_img_url",
            UiRole::PreviewImage => "img.thumbnail",
            UiRole::UploadButton => "#img_upload_btn",
            UiRole::Card => ".cocktail-cards",
        }
    }

    /// Roles bound to every matching element rather than the first one.
    pub fn is_multiple(self) -> bool {
        matches!(
            self,
            UiRole::GuardedForm | UiRole::PreviewImage | UiRole::Card
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            UiRole::GuardedForm => "guarded form",
            UiRole::Password => "password field",
            UiRole::ConfirmPassword => "confirm password field",
            UiRole::ImageUrl => "image url field",
            UiRole::PreviewImage => "preview image",
            UiRole::UploadButton => "upload button",
            UiRole::Card => "card",
        }
    }
}
