//! libra-web: server rendered dashboard for accountant books.
//!
//! Pages are plain HTML strings built in `views`; handlers in `routes`
//! fetch through the `libra-data` operation traits on a `Connection`.

pub mod error;
pub mod routes;
pub mod server;
pub mod views;

pub use error::WebError;
pub use server::{build_router, run_server, AppState, ServerConfig};
