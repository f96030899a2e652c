//! Browser-side behavior for the shakenstir cocktail forms: validation styling,
//! password confirmation, the image upload widget, image preview and card hover.

mod bindings;
mod cloudinary;
mod config;
pub mod dom;
mod page;

pub use cloudinary::{CloudinaryFactory, CloudinaryWidget};
pub use page::{install_with, installed_listener_count, is_installed, start, PageHandle};
