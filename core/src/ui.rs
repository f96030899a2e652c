//! Element capabilities the controller needs, independent of the DOM binding.

pub trait ClassList {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// A form backed by native constraint validation.
pub trait ConstraintForm: ClassList {
    fn check_validity(&self) -> bool;
}

pub trait ValueField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

pub trait ImageSource {
    fn set_src(&self, src: &str);
}

/// Handle types for one UI implementation (the browser DOM, or a test double).
pub trait Ui: 'static {
    type Form: ConstraintForm + Clone;
    type Field: ValueField + ClassList + Clone;
    type Image: ImageSource + Clone;
    type Card: ClassList + Clone;
    type Button: Clone;
}

/// Concrete handles per role, resolved once when the page is bound.
pub struct UiBindings<U: Ui> {
    pub forms: Vec<U::Form>,
    pub password: Option<U::Field>,
    pub confirm_password: Option<U::Field>,
    pub image_url: Option<U::Field>,
    pub previews: Vec<U::Image>,
    pub upload_button: Option<U::Button>,
    pub cards: Vec<U::Card>,
}

impl<U: Ui> Default for UiBindings<U> {
    fn default() -> Self {
        Self {
            forms: Vec::new(),
            password: None,
            confirm_password: None,
            image_url: None,
            previews: Vec::new(),
            upload_button: None,
            cards: Vec::new(),
        }
    }
}

impl<U: Ui> UiBindings<U> {
    pub fn has_password_pair(&self) -> bool {
        self.password.is_some() && self.confirm_password.is_some()
    }
}
