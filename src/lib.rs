//! # Zookeepr
//!
//! A small HTTP API over a collection of animals:
//! - Filtered listing by traits, diet, species and name
//! - Lookup by id
//! - Validated creation with length-based ids
//! - Whole-document JSON persistence after every write
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HTTP Server (axum)                       │
//! │        /api/animals   /api/animals/:id   / + static          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     AnimalStore                              │
//! │            (Single Writer / Multi Reader)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────┐
//!          │            │             │
//!          ▼            ▼             ▼
//!   ┌────────────┐ ┌──────────┐ ┌─────────────┐
//!   │   Query    │ │  Model   │ │  Storage    │
//!   │ filter/get │ │ validate │ │ (JSON doc)  │
//!   └────────────┘ └──────────┘ └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod query;
pub mod storage;
pub mod store;
pub mod http;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ZooError, Result};
pub use config::Config;
pub use model::{Animal, AnimalDraft};
pub use store::AnimalStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Zookeepr
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
