use armature::filter::fuzzy_filter;
use armature::item::Item;

fn items(labels: &[&str]) -> Vec<Item> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Item::new(format!("item-{i}"), *label))
        .collect()
}

#[test]
fn test_empty_query_returns_all() {
    let items = items(&["apple", "banana"]);
    let matches = fuzzy_filter("", &items);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].index, 0);
    assert_eq!(matches[1].index, 1);
}

#[test]
fn test_fuzzy_matching() {
    let items = items(&["apple", "banana", "apricot"]);
    let matches = fuzzy_filter("ap", &items);
    assert_eq!(matches.len(), 2);
    // Both apple and apricot match "ap"
    let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
    assert!(indices.contains(&0)); // apple
    assert!(indices.contains(&2)); // apricot
}

#[test]
fn test_no_matches() {
    let items = items(&["apple", "banana"]);
    let matches = fuzzy_filter("xyz", &items);
    assert!(matches.is_empty());
}

#[test]
fn test_case_insensitive() {
    let items = items(&["Apple", "BANANA"]);
    let matches = fuzzy_filter("apple", &items);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 0);
}

#[test]
fn test_sorted_by_score() {
    let items = items(&["grape", "apple"]);
    let matches = fuzzy_filter("ap", &items);
    assert_eq!(matches.len(), 2);
    // The prefix match outscores the mid-word match
    assert_eq!(matches[0].index, 1);
    assert!(matches[0].score >= matches[1].score);
}
