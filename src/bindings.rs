use shakenstir_core::{UiBindings, UiRole};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlImageElement, HtmlInputElement};

use crate::dom::{DomButton, DomCard, DomField, DomForm, DomImage, WebUi};

pub(crate) fn bind_document(document: &Document) -> UiBindings<WebUi> {
    UiBindings {
        forms: query_all::<HtmlFormElement>(document, UiRole::GuardedForm)
            .into_iter()
            .map(DomForm)
            .collect(),
        password: query_one::<HtmlInputElement>(document, UiRole::Password).map(DomField),
        confirm_password: query_one::<HtmlInputElement>(document, UiRole::ConfirmPassword)
            .map(DomField),
        image_url: query_one::<HtmlInputElement>(document, UiRole::ImageUrl).map(DomField),
        previews: query_all::<HtmlImageElement>(document, UiRole::PreviewImage)
            .into_iter()
            .map(DomImage)
            .collect(),
        upload_button: query_one::<Element>(document, UiRole::UploadButton).map(DomButton),
        cards: query_all::<Element>(document, UiRole::Card)
            .into_iter()
            .map(DomCard)
            .collect(),
    }
}

fn query_one<T: JsCast>(document: &Document, role: UiRole) -> Option<T> {
    let element = match document.query_selector(role.selector()) {
        Ok(element) => element?,
        Err(_) => {
            gloo::console::warn!("selector query failed", role.label());
            return None;
        }
    };
    match element.dyn_into::<T>() {
        Ok(element) => Some(element),
        Err(_) => {
            gloo::console::warn!("element has unexpected type", role.label());
            None
        }
    }
}

fn query_all<T: JsCast>(document: &Document, role: UiRole) -> Vec<T> {
    let Ok(list) = document.query_selector_all(role.selector()) else {
        gloo::console::warn!("selector query failed", role.label());
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
