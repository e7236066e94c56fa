//! Query Module
//!
//! Read paths over the collection. Both are pure functions over a slice of
//! records and never mutate it.
//!
//! ## Query String Shape
//! ```text
//! /api/animals?personalityTraits=quirky&personalityTraits=rash&diet=omnivore
//!              └──────────── many ────────────────────────┘ └── single ──┘
//! ```
//! A repeated key, or a key written as `name[]`, produces a sequence.

mod filter;
mod lookup;

pub use filter::{filter_by_query, AnimalQuery, QueryValue};
pub use lookup::find_by_id;
