use super::*;

#[test]
fn layer_rank_follows_table() {
    for (i, name) in LAYER_ORDER.iter().enumerate() {
        assert_eq!(Category::new(*name).layer_rank(), Some(i), "rank of {}", name);
    }
    assert_eq!(Category::new("HATS").layer_rank(), None);
}

#[test]
fn layer_rank_ignores_case() {
    assert_eq!(Category::new("tops").layer_rank(), Some(1));
    assert_eq!(Category::new("Bangs").layer_rank(), Some(8));
}

#[test]
fn asset_dir_name_is_lowercase() {
    let category = Category::new("EYES");
    assert_eq!(category.asset_dir_name(), "eyes");
    assert_eq!(category.to_string(), "EYES");
}

#[test]
fn display_order_puts_unranked_last() {
    let mut categories: Vec<Category> = ["HATS", "EYES", "BOTTOMS", "ACCESSORIES", "TOPS"]
        .into_iter()
        .map(Category::from)
        .collect();
    categories.sort_by(|a, b| a.display_cmp(b));
    let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
    assert_eq!(names, ["BOTTOMS", "TOPS", "EYES", "ACCESSORIES", "HATS"]);
}

#[test]
fn sort_categories_accepts_references() {
    let owned = [Category::new("LIPS"), Category::new("Capes"), Category::new("hairs")];
    let mut refs: Vec<&Category> = owned.iter().collect();
    sort_categories(&mut refs);
    let names: Vec<&str> = refs.iter().map(|c| c.as_str()).collect();
    assert_eq!(names, ["hairs", "LIPS", "Capes"]);
}

#[test]
fn draw_order_puts_unranked_below_ranked() {
    let mut categories: Vec<Category> = ["BANGS", "HATS", "BOTTOMS", "ACCESSORIES"]
        .into_iter()
        .map(Category::from)
        .collect();
    categories.sort_by(|a, b| a.draw_cmp(b));
    let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
    assert_eq!(names, ["ACCESSORIES", "HATS", "BOTTOMS", "BANGS"]);
}

#[test]
fn item_ref_parses_category_and_name() {
    let item: ItemRef = "TOPS=red shirt".parse().unwrap();
    assert_eq!(item.category, Category::new("TOPS"));
    assert_eq!(item.name, "red shirt");
    assert_eq!(item.to_string(), "TOPS=red shirt");
}

#[test]
fn item_ref_rejects_malformed_input() {
    for input in ["TOPS", "=shirt", "TOPS=", " = "] {
        let err = input.parse::<ItemRef>().unwrap_err();
        assert_eq!(err.0, input);
    }
}
