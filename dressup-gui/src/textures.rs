use image::RgbaImage;

/// Convert a decoded image into something egui can upload.
pub fn to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

/// Upload `image` as a new texture, or refresh `slot` in place if it
/// already holds one.
pub fn upload(
    ctx: &egui::Context,
    slot: &mut Option<egui::TextureHandle>,
    name: &str,
    image: &RgbaImage,
) {
    let color_image = to_color_image(image);
    match slot {
        Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
        None => *slot = Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)),
    }
}
