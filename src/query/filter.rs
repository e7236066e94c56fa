//! Query filter
//!
//! Narrows the collection by trait membership and exact field equality.

use crate::model::Animal;

/// A query parameter value: one string or several
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Many(Vec<String>),
}

impl QueryValue {
    /// An empty single string counts as not supplied
    fn is_set(&self) -> bool {
        match self {
            QueryValue::Single(s) => !s.is_empty(),
            QueryValue::Many(_) => true,
        }
    }

    /// Coerce to a sequence
    fn as_slice(&self) -> &[String] {
        match self {
            QueryValue::Single(s) => std::slice::from_ref(s),
            QueryValue::Many(v) => v,
        }
    }

    /// Exact equality against a field. A sequence never equals a string.
    fn matches_field(&self, field: &str) -> bool {
        match self {
            QueryValue::Single(s) => s == field,
            QueryValue::Many(_) => false,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(first) => {
                *self = QueryValue::Many(vec![std::mem::take(first), value]);
            }
            QueryValue::Many(v) => v.push(value),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Single(s.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(v: Vec<String>) -> Self {
        QueryValue::Many(v)
    }
}

/// Recognized filters for `GET /api/animals`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalQuery {
    pub personality_traits: Option<QueryValue>,
    pub diet: Option<QueryValue>,
    pub species: Option<QueryValue>,
    pub name: Option<QueryValue>,
}

impl AnimalQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from decoded query-string pairs
    ///
    /// Unrecognized keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let (base, bracketed) = match key.strip_suffix("[]") {
                Some(base) => (base, true),
                None => (key, false),
            };
            let slot = match base {
                "personalityTraits" => &mut query.personality_traits,
                "diet" => &mut query.diet,
                "species" => &mut query.species,
                "name" => &mut query.name,
                _ => continue,
            };
            let value = value.into();
            match slot {
                Some(existing) => existing.push(value),
                None if bracketed => *slot = Some(QueryValue::Many(vec![value])),
                None => *slot = Some(QueryValue::Single(value)),
            }
        }
        query
    }

    pub fn personality_traits(mut self, value: impl Into<QueryValue>) -> Self {
        self.personality_traits = Some(value.into());
        self
    }

    pub fn diet(mut self, value: impl Into<QueryValue>) -> Self {
        self.diet = Some(value.into());
        self
    }

    pub fn species(mut self, value: impl Into<QueryValue>) -> Self {
        self.species = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<QueryValue>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// True when no filter would narrow the result
    pub fn is_empty(&self) -> bool {
        [&self.personality_traits, &self.diet, &self.species, &self.name]
            .iter()
            .all(|v| supplied(v).is_none())
    }
}

fn supplied(value: &Option<QueryValue>) -> Option<&QueryValue> {
    value.as_ref().filter(|v| v.is_set())
}

/// Return the animals matching every supplied filter, in input order
pub fn filter_by_query(query: &AnimalQuery, animals: &[Animal]) -> Vec<Animal> {
    let mut results: Vec<Animal> = animals.to_vec();

    if let Some(traits) = supplied(&query.personality_traits) {
        // Narrow once per requested trait; survivors carry all of them
        for wanted in traits.as_slice() {
            results.retain(|animal| animal.has_trait(wanted));
        }
    }

    if let Some(diet) = supplied(&query.diet) {
        results.retain(|animal| diet.matches_field(&animal.diet));
    }
    if let Some(species) = supplied(&query.species) {
        results.retain(|animal| species.matches_field(&animal.species));
    }
    if let Some(name) = supplied(&query.name) {
        results.retain(|animal| name.matches_field(&animal.name));
    }

    results
}
