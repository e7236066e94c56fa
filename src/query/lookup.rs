//! Lookup by id

use crate::model::Animal;

/// First animal whose id equals `id`, scanning from the front
pub fn find_by_id<'a>(id: &str, animals: &'a [Animal]) -> Option<&'a Animal> {
    animals.iter().find(|animal| animal.id == id)
}
