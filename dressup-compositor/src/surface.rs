//! The drawing surface the compositor stacks layers on.

use dressup_core::{Bounds, Point, Size};
use image::RgbaImage;

use crate::ComposeError;

/// Opaque identifier of one layer on a [`RenderSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerHandle(pub(crate) u64);

/// A stage that holds positioned image layers in a z-ordered stack.
///
/// New layers are created on top of the stack. Operations on a handle that
/// is no longer on the surface return `false` and change nothing.
pub trait RenderSurface {
    /// Dimensions of the visible stage.
    fn stage_size(&self) -> Size;

    /// Place `image` with its top-left corner at `position`, on top of the stack.
    fn create_layer(&mut self, image: RgbaImage, position: Point) -> LayerHandle;

    /// Remove a layer and release its pixels.
    fn remove_layer(&mut self, handle: LayerHandle) -> bool;

    fn raise_to_top(&mut self, handle: LayerHandle) -> bool;

    fn lower_to_bottom(&mut self, handle: LayerHandle) -> bool;

    /// Flatten everything visible inside `bounds` into a new image.
    fn capture_region(&self, bounds: Bounds) -> Result<RgbaImage, ComposeError>;

    /// Current stack, bottom to top.
    fn layer_order(&self) -> Vec<LayerHandle>;
}
