//! The application root view.

use crate::markup::{Element, Tag};

/// Application title shown in the header and the document title.
pub const APP_TITLE: &str = "Quantum Circuit Editor";

/// Body text of the landing view.
pub const WELCOME_MESSAGE: &str = "Welcome to the Quantum Circuit Editor application.";

/// Build the root view.
///
/// ```text
/// div.app
/// ├── header.app-header
/// │   └── h1 "Quantum Circuit Editor"
/// └── main
///     └── p "Welcome to the Quantum Circuit Editor application."
/// ```
///
/// Takes no input and has no side effects; every call returns an equal tree.
pub fn root_view() -> Element {
    Element::new(Tag::Div)
        .class("app")
        .child(
            Element::new(Tag::Header)
                .class("app-header")
                .child(Element::new(Tag::Heading(1)).child(APP_TITLE)),
        )
        .child(Element::new(Tag::Main).child(Element::new(Tag::P).child(WELCOME_MESSAGE)))
}
