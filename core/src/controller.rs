use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::BridgeError;
use crate::markers::CARD_HOVER_CLASS;
use crate::ui::{ClassList, ImageSource, Ui, UiBindings, ValueField};
use crate::upload::{UploadEvent, UploadWidget, UploadWidgetConfig, UploadWidgetFactory};
use crate::validation::{self, FieldValidity, SubmitVerdict};

/// Per-page behavior over a set of bound elements and at most one upload widget.
///
/// Every handler is synchronous and stateless apart from the DOM it touches;
/// listeners call into it from the browser layer.
pub struct FormController<U: Ui> {
    bindings: UiBindings<U>,
    widget: RefCell<Option<Box<dyn UploadWidget>>>,
}

impl<U: Ui> FormController<U> {
    pub fn new(bindings: UiBindings<U>) -> Rc<Self> {
        Rc::new(Self {
            bindings,
            widget: RefCell::new(None),
        })
    }

    pub fn bindings(&self) -> &UiBindings<U> {
        &self.bindings
    }

    pub fn has_widget(&self) -> bool {
        self.widget.borrow().is_some()
    }

    /// Creates the page's upload widget. `observer` sees every callback before
    /// the controller applies it.
    ///
    /// The widget only holds a weak reference back to the controller.
    pub fn attach_widget<F, O>(
        self: &Rc<Self>,
        factory: &F,
        config: &UploadWidgetConfig,
        observer: O,
    ) -> Result<(), BridgeError>
    where
        F: UploadWidgetFactory + ?Sized,
        O: Fn(&UploadEvent) + 'static,
    {
        let controller: Weak<Self> = Rc::downgrade(self);
        let callback = Rc::new(move |event: UploadEvent| {
            observer(&event);
            if let Some(controller) = controller.upgrade() {
                controller.apply_upload(&event);
            }
        });
        let widget = factory.create_upload_widget(config, callback)?;
        *self.widget.borrow_mut() = Some(widget);
        Ok(())
    }

    pub fn submit(&self, form: &U::Form) -> SubmitVerdict {
        validation::guard_submission(form)
    }

    /// Re-evaluates the confirmation field. `None` when either password field is unbound.
    pub fn passwords_changed(&self) -> Option<FieldValidity> {
        let password = self.bindings.password.as_ref()?;
        let confirm = self.bindings.confirm_password.as_ref()?;
        let validity = validation::compare_passwords(&password.value(), &confirm.value());
        validation::mark_validity(confirm, validity);
        Some(validity)
    }

    /// Writes a successful upload's URL into the image field. Returns whether it did.
    pub fn apply_upload(&self, event: &UploadEvent) -> bool {
        let Some(secure_url) = event.secure_url() else {
            return false;
        };
        let Some(field) = self.bindings.image_url.as_ref() else {
            return false;
        };
        field.set_value(secure_url);
        true
    }

    /// Clears the image field, then opens the widget.
    pub fn open_upload(&self) -> Result<(), BridgeError> {
        if let Some(field) = self.bindings.image_url.as_ref() {
            field.set_value("");
        }
        match self.widget.borrow().as_ref() {
            Some(widget) => widget.open(),
            None => Err(BridgeError::NotAttached),
        }
    }

    /// Points every preview image at the image field's current value.
    pub fn refresh_preview(&self) -> Option<String> {
        let field = self.bindings.image_url.as_ref()?;
        let src = field.value();
        for image in &self.bindings.previews {
            image.set_src(&src);
        }
        Some(src)
    }

    pub fn card_entered(&self, card: &U::Card) {
        card.add_class(CARD_HOVER_CLASS);
    }

    pub fn card_left(&self, card: &U::Card) {
        card.remove_class(CARD_HOVER_CLASS);
    }
}
