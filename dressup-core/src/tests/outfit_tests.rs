use super::*;

#[test]
fn new_outfit_is_empty() {
    let outfit = Outfit::new();
    assert!(outfit.is_empty());
    assert_eq!(outfit.get("TOPS"), None);
}

#[test]
fn wearing_replaces_previous_item() {
    let mut outfit = Outfit::new();
    assert_eq!(outfit.wear(Category::new("TOPS"), "tee"), None);
    assert_eq!(
        outfit.wear(Category::new("TOPS"), "sweater"),
        Some("tee".to_string())
    );
    assert_eq!(outfit.len(), 1);
    assert_eq!(outfit.get("TOPS"), Some("sweater"));
}

#[test]
fn category_case_shares_one_slot() {
    let mut outfit = Outfit::new();
    outfit.wear(Category::new("TOPS"), "tee");
    assert_eq!(
        outfit.wear(Category::new("tops"), "vest"),
        Some("tee".to_string())
    );
    assert_eq!(outfit.len(), 1);
    assert_eq!(outfit.get("Tops"), Some("vest"));
    let worn: Vec<&str> = outfit.iter_back_to_front().map(|(c, _)| c.as_str()).collect();
    assert_eq!(worn, ["tops"]);
    assert_eq!(outfit.take_off("TOPS"), Some("vest".to_string()));
    assert!(outfit.is_empty());
}

#[test]
fn take_off_empties_slot() {
    let mut outfit = Outfit::new();
    outfit.wear(Category::new("EYES"), "blue");
    assert_eq!(outfit.take_off("EYES"), Some("blue".to_string()));
    assert_eq!(outfit.take_off("EYES"), None);
    assert!(outfit.is_empty());
}

#[test]
fn back_to_front_uses_layer_order() {
    let outfit: Outfit = [("BANGS", "fringe"), ("EYES", "green"), ("BOTTOMS", "jeans")]
        .into_iter()
        .map(|(c, i)| (Category::new(c), i.to_string()))
        .collect();
    let order: Vec<&str> = outfit.iter_back_to_front().map(|(c, _)| c.as_str()).collect();
    assert_eq!(order, ["BOTTOMS", "EYES", "BANGS"]);
}
