use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use shakenstir_core::{
    FormController, SubmitVerdict, UploadEvent, UploadWidgetConfig, UploadWidgetFactory,
};
use web_sys::{Document, Event};

use crate::bindings::bind_document;
use crate::cloudinary::CloudinaryFactory;
use crate::config::load_widget_config;
use crate::dom::WebUi;

/// An installed page. Dropping it detaches every listener.
pub struct PageHandle {
    controller: Rc<FormController<WebUi>>,
    listeners: Vec<EventListener>,
}

impl PageHandle {
    pub fn controller(&self) -> &Rc<FormController<WebUi>> {
        &self.controller
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

thread_local! {
    static PAGE: RefCell<Option<PageHandle>> = RefCell::new(None);
}

/// Installs the form controller for the current document, once.
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::warn!("form controller: no document");
        return;
    };
    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_event: &Event| {
            install_page(&target);
        })
        .forget();
    } else {
        install_page(&document);
    }
}

pub fn is_installed() -> bool {
    PAGE.with(|slot| slot.borrow().is_some())
}

/// Listener count of the page installed by [`start`], if any.
pub fn installed_listener_count() -> Option<usize> {
    PAGE.with(|slot| slot.borrow().as_ref().map(PageHandle::listener_count))
}

fn install_page(document: &Document) {
    if is_installed() {
        return;
    }
    let config = load_widget_config(document);
    let handle = match CloudinaryFactory::from_window() {
        Ok(factory) => {
            install_with(document, Some(&factory as &dyn UploadWidgetFactory), &config)
        }
        Err(err) => {
            gloo::console::warn!("upload widget unavailable", err.to_string());
            install_with(document, None, &config)
        }
    };
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(handle);
    });
}

/// Binds `document`, creates the upload widget through `factory` and attaches all listeners.
pub fn install_with(
    document: &Document,
    factory: Option<&dyn UploadWidgetFactory>,
    config: &UploadWidgetConfig,
) -> PageHandle {
    let controller = FormController::new(bind_document(document));
    if let Some(factory) = factory {
        if let Err(err) = controller.attach_widget(factory, config, log_upload_event) {
            gloo::console::warn!("upload widget not created", err.to_string());
        }
    }

    let mut listeners = Vec::new();
    install_submit_guards(&controller, &mut listeners);
    install_password_matcher(&controller, &mut listeners);
    install_upload_button(&controller, &mut listeners);
    install_preview(&controller, &mut listeners);
    install_card_hover(&controller, &mut listeners);
    gloo::console::debug!("form controller installed", listeners.len() as u32);

    PageHandle {
        controller,
        listeners,
    }
}

fn install_submit_guards(
    controller: &Rc<FormController<WebUi>>,
    listeners: &mut Vec<EventListener>,
) {
    for form in &controller.bindings().forms {
        let controller = controller.clone();
        let form_for_submit = form.clone();
        let listener = EventListener::new_with_options(
            &form.0,
            "submit",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                if controller.submit(&form_for_submit) == SubmitVerdict::Cancel {
                    event.prevent_default();
                    event.stop_propagation();
                }
            },
        );
        listeners.push(listener);
    }
}

fn install_password_matcher(
    controller: &Rc<FormController<WebUi>>,
    listeners: &mut Vec<EventListener>,
) {
    let bindings = controller.bindings();
    if !bindings.has_password_pair() {
        return;
    }
    for field in bindings.password.iter().chain(&bindings.confirm_password) {
        let controller = controller.clone();
        let listener = EventListener::new(&field.0, "keyup", move |_event: &Event| {
            controller.passwords_changed();
        });
        listeners.push(listener);
    }
}

fn install_upload_button(
    controller: &Rc<FormController<WebUi>>,
    listeners: &mut Vec<EventListener>,
) {
    let Some(button) = controller.bindings().upload_button.as_ref() else {
        return;
    };
    let controller = controller.clone();
    let listener = EventListener::new(&button.0, "click", move |_event: &Event| {
        if let Err(err) = controller.open_upload() {
            gloo::console::warn!("upload widget not opened", err.to_string());
        }
    });
    listeners.push(listener);
}

fn install_preview(controller: &Rc<FormController<WebUi>>, listeners: &mut Vec<EventListener>) {
    let Some(field) = controller.bindings().image_url.as_ref() else {
        return;
    };
    let controller = controller.clone();
    let listener = EventListener::new(&field.0, "change", move |_event: &Event| {
        controller.refresh_preview();
    });
    listeners.push(listener);
}

fn install_card_hover(controller: &Rc<FormController<WebUi>>, listeners: &mut Vec<EventListener>) {
    for card in &controller.bindings().cards {
        let controller_for_enter = controller.clone();
        let card_for_enter = card.clone();
        listeners.push(EventListener::new(&card.0, "mouseenter", move |_event: &Event| {
            controller_for_enter.card_entered(&card_for_enter);
        }));

        let controller_for_leave = controller.clone();
        let card_for_leave = card.clone();
        listeners.push(EventListener::new(&card.0, "mouseleave", move |_event: &Event| {
            controller_for_leave.card_left(&card_for_leave);
        }));
    }
}

fn log_upload_event(event: &UploadEvent) {
    match event {
        UploadEvent::Uploaded { secure_url } => {
            gloo::console::log!("upload complete", secure_url.clone());
        }
        UploadEvent::Failed { message } => {
            gloo::console::warn!("upload failed", message.clone());
        }
        UploadEvent::Progress { event } => {
            gloo::console::debug!("upload widget event", event.clone());
        }
        UploadEvent::Malformed { reason } => {
            gloo::console::warn!("upload result ignored", reason.clone());
        }
    }
}
