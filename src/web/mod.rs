//! HTTP surface.
//!
//! An HTML page at `/` with form actions, plus JSON endpoints exposing the
//! same loader and action data.

pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;

pub use error::WebError;
pub use handlers::{ActionData, ActionForm, BrowseQuery, LoaderData};
pub use router::{router, serve, serve_on};
pub use state::{AppState, WebSettings};
