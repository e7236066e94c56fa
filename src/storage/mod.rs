//! Storage Module
//!
//! Durable copy of the collection as a single JSON document.
//!
//! ## Responsibilities
//! - Load the collection once at startup
//! - Overwrite the whole document after every append
//! - Create the document (and its directory) on first write
//!
//! ## File Format
//! ```text
//! {
//!   "animals": [
//!     {
//!       "id": "0",
//!       "name": "Erica",
//!       "species": "gorilla",
//!       "diet": "omnivore",
//!       "personalityTraits": ["quirky", "rash"]
//!     }
//!   ]
//! }
//! ```
//! Pretty-printed with two-space indentation, rewritten wholesale.

mod document;

pub use document::{AnimalDocument, DocumentFile};
