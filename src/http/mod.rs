//! HTTP Module
//!
//! axum routes over the animal store.
//!
//! ## Routes
//! - `GET  /api/animals`      filtered list (query string, see `query`)
//! - `GET  /api/animals/:id`  one animal, or a bare 404
//! - `POST /api/animals`      create from a JSON or URL-encoded body
//! - `GET  /`                 landing page (`public/index.html`)
//! - anything else            static files from the public directory
//!
//! `/api/animals/` with a trailing slash is the same collection route.
//!
//! ## Architecture
//! - tokio runtime, one task per connection (axum)
//! - Handlers share the store as `Arc<AnimalStore>` state
//! - Store calls run on the blocking pool; a create holds the write lock
//!   across the document rewrite

mod extract;
mod handlers;
mod response;
mod router;
mod server;

pub use extract::AnimalBody;
pub use router::build_router;
pub use server::{shutdown_signal, Server};
