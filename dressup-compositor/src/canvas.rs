use dressup_core::{Bounds, Point, Size};
use image::imageops;
use image::{Rgba, RgbaImage};

use crate::ComposeError;
use crate::surface::{LayerHandle, RenderSurface};

#[derive(Debug)]
struct Layer {
    handle: LayerHandle,
    image: RgbaImage,
    position: Point,
}

/// In-memory stage: a stack of positioned RGBA layers over a solid background.
#[derive(Debug)]
pub struct Canvas {
    size: Size,
    background: Rgba<u8>,
    /// Bottom to top.
    layers: Vec<Layer>,
    next_id: u64,
}

impl Canvas {
    pub fn new(size: Size, background: Rgba<u8>) -> Self {
        Self {
            size,
            background,
            layers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn contains(&self, handle: LayerHandle) -> bool {
        self.index_of(handle).is_some()
    }

    pub fn layer_position(&self, handle: LayerHandle) -> Option<Point> {
        self.index_of(handle).map(|i| self.layers[i].position)
    }

    /// Flatten the whole stage.
    pub fn render(&self) -> Result<RgbaImage, ComposeError> {
        self.capture_region(Bounds::from_origin(Point::ORIGIN, self.size))
    }

    fn index_of(&self, handle: LayerHandle) -> Option<usize> {
        self.layers.iter().position(|l| l.handle == handle)
    }
}

impl RenderSurface for Canvas {
    fn stage_size(&self) -> Size {
        self.size
    }

    fn create_layer(&mut self, image: RgbaImage, position: Point) -> LayerHandle {
        let handle = LayerHandle(self.next_id);
        self.next_id += 1;
        self.layers.push(Layer {
            handle,
            image,
            position,
        });
        handle
    }

    fn remove_layer(&mut self, handle: LayerHandle) -> bool {
        match self.index_of(handle) {
            Some(i) => {
                self.layers.remove(i);
                true
            }
            None => false,
        }
    }

    fn raise_to_top(&mut self, handle: LayerHandle) -> bool {
        match self.index_of(handle) {
            Some(i) => {
                let layer = self.layers.remove(i);
                self.layers.push(layer);
                true
            }
            None => false,
        }
    }

    fn lower_to_bottom(&mut self, handle: LayerHandle) -> bool {
        match self.index_of(handle) {
            Some(i) => {
                let layer = self.layers.remove(i);
                self.layers.insert(0, layer);
                true
            }
            None => false,
        }
    }

    fn capture_region(&self, bounds: Bounds) -> Result<RgbaImage, ComposeError> {
        if bounds.is_empty() {
            return Err(ComposeError::Capture(format!(
                "empty region {}x{} at ({}, {})",
                bounds.width, bounds.height, bounds.x, bounds.y
            )));
        }

        let mut out = RgbaImage::from_pixel(bounds.width, bounds.height, self.background);
        for layer in &self.layers {
            imageops::overlay(
                &mut out,
                &layer.image,
                layer.position.x - bounds.x,
                layer.position.y - bounds.y,
            );
        }
        Ok(out)
    }

    fn layer_order(&self) -> Vec<LayerHandle> {
        self.layers.iter().map(|l| l.handle).collect()
    }
}

#[cfg(test)]
#[path = "tests/canvas_tests.rs"]
mod tests;
