//! `qce-view` — the Quantum Circuit Editor root view.
//!
//! The view is a plain markup tree built by [`root_view`]. It can be rendered
//! to HTML for serving, or wrapped in a [`Screen`] and queried the way a user
//! would look at it: by heading role and by visible text.
//!
//! # Quick start
//!
//! ```rust
//! use qce_view::{Screen, root_view};
//!
//! let screen = Screen::render(root_view());
//! let heading = screen.get_by_role_heading(1, "quantum circuit editor").unwrap();
//! assert_eq!(heading.text_content(), "Quantum Circuit Editor");
//! assert!(screen.get_by_text("welcome to the quantum circuit editor").is_ok());
//! ```

pub mod error;
pub mod markup;
pub mod render;
pub mod screen;
pub mod view;

pub use error::{QueryError, QueryResult};
pub use markup::{Element, Node, Tag};
pub use render::{render, render_document};
pub use screen::Screen;
pub use view::{APP_TITLE, WELCOME_MESSAGE, root_view};
