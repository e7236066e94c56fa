//! Tests for lookup by id

use zookeepr::model::Animal;
use zookeepr::query::find_by_id;

fn animal(id: &str, name: &str) -> Animal {
    Animal::new(id, name, "cat", "omnivore", vec!["quirky".to_string()])
}

#[test]
fn test_find_existing_id() {
    let animals = vec![animal("0", "A"), animal("1", "B")];
    assert_eq!(find_by_id("1", &animals).map(|a| a.name.as_str()), Some("B"));
}

#[test]
fn test_missing_id_is_none() {
    let animals = vec![animal("0", "A")];
    assert!(find_by_id("99", &animals).is_none());
}

#[test]
fn test_empty_collection() {
    assert!(find_by_id("0", &[]).is_none());
}

#[test]
fn test_first_duplicate_wins() {
    let animals = vec![animal("0", "A"), animal("1", "B"), animal("1", "C")];
    assert_eq!(find_by_id("1", &animals).map(|a| a.name.as_str()), Some("B"));
}

#[test]
fn test_id_match_is_exact_string() {
    let animals = vec![animal("1", "A")];
    assert!(find_by_id("01", &animals).is_none());
    assert!(find_by_id(" 1", &animals).is_none());
}
