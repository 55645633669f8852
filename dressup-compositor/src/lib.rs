pub mod canvas;
pub mod compositor;
pub mod error;
pub mod layout;
pub mod screenshot;
pub mod surface;
pub mod thumbnail;

pub use canvas::Canvas;
pub use compositor::{Compositor, WornLayer};
pub use error::ComposeError;
pub use layout::StageLayout;
pub use screenshot::{save_screenshot, screenshot_file_name};
pub use surface::{LayerHandle, RenderSurface};
pub use thumbnail::load_thumbnail;
