pub mod stage;
pub mod wardrobe;
