use egui::load::SizedTexture;

use crate::app::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAction {
    Screenshot,
    Undress,
}

/// Render the toolbar and the flattened stage image.
pub fn show(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    status: Option<&Status>,
) -> Option<StageAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("Take Screenshot").clicked() {
            action = Some(StageAction::Screenshot);
        }
        if ui.button("Undress").clicked() {
            action = Some(StageAction::Undress);
        }
        if let Some(status) = status {
            let color = if status.is_error {
                ui.visuals().error_fg_color
            } else {
                ui.visuals().text_color()
            };
            ui.colored_label(color, &status.text);
        }
    });
    ui.add_space(4.0);

    match texture {
        Some(texture) => {
            egui::ScrollArea::both().id_salt("stage").show(ui, |ui| {
                ui.image(SizedTexture::from_handle(texture));
            });
        }
        None => {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
        }
    }

    action
}
