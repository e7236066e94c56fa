//! Animal record definitions
//!
//! Defines the stored record and the untyped draft it is built from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ZooError};

/// A single animal in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Decimal string of the collection length at insertion time
    pub id: String,

    pub name: String,

    pub species: String,

    pub diet: String,

    /// Traits in the order they were submitted
    #[serde(rename = "personalityTraits")]
    pub personality_traits: Vec<String>,
}

impl Animal {
    /// Create an animal from its parts
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        diet: impl Into<String>,
        personality_traits: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            diet: diet.into(),
            personality_traits,
        }
    }

    /// Whether the trait list contains `trait_name` (exact match)
    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.personality_traits.iter().any(|t| t == trait_name)
    }
}

/// An incoming record before validation
///
/// Holds the request body as parsed JSON. Any `id` the client sent is
/// discarded; the store assigns ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimalDraft {
    fields: Map<String, Value>,
}

impl AnimalDraft {
    /// Wrap a parsed body. Non-object bodies become an empty draft, which
    /// never validates.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                fields.remove("id");
                Self { fields }
            }
            _ => Self::default(),
        }
    }

    /// Look up a raw field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a raw field
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Build the typed record with the assigned id
    ///
    /// Fails with `InvalidAnimal` when a field cannot take its typed form,
    /// e.g. a trait list holding numbers.
    pub fn into_animal(self, id: String) -> Result<Animal> {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(id));
        serde_json::from_value(Value::Object(fields)).map_err(|e| {
            tracing::debug!("draft does not convert to an animal: {}", e);
            ZooError::InvalidAnimal
        })
    }
}
