use shakenstir_core::{ClassList, ConstraintForm, ImageSource, Ui, ValueField};
use web_sys::{Element, HtmlFormElement, HtmlImageElement, HtmlInputElement};

/// Browser DOM implementation of the controller's element capabilities.
pub struct WebUi;

impl Ui for WebUi {
    type Form = DomForm;
    type Field = DomField;
    type Image = DomImage;
    type Card = DomCard;
    type Button = DomButton;
}

#[derive(Clone, Debug)]
pub struct DomForm(pub HtmlFormElement);

#[derive(Clone, Debug)]
pub struct DomField(pub HtmlInputElement);

#[derive(Clone, Debug)]
pub struct DomImage(pub HtmlImageElement);

#[derive(Clone, Debug)]
pub struct DomCard(pub Element);

#[derive(Clone, Debug)]
pub struct DomButton(pub Element);

fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

macro_rules! impl_class_list {
    ($ty:ty) => {
        impl ClassList for $ty {
            fn add_class(&self, class: &str) {
                add_class(&self.0, class);
            }

            fn remove_class(&self, class: &str) {
                remove_class(&self.0, class);
            }

            fn has_class(&self, class: &str) -> bool {
                has_class(&self.0, class)
            }
        }
    };
}

impl_class_list!(DomForm);
impl_class_list!(DomField);
impl_class_list!(DomCard);

impl ConstraintForm for DomForm {
    fn check_validity(&self) -> bool {
        self.0.check_validity()
    }
}

impl ValueField for DomField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }
}

impl ImageSource for DomImage {
    fn set_src(&self, src: &str) {
        self.0.set_src(src);
    }
}
