//! Desktop shell for the dress-up game: wardrobe panel on the left, the
//! dressed model on the right.

pub mod app;
pub mod textures;
pub mod widgets;

pub use app::{DressUpApp, Status};
