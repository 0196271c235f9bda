use eframe::egui;

use crate::soundboard::Action;
use crate::types::sound_entry::SoundEntry;

const BUTTON_HEIGHT: f32 = 28.0;

/// Scrollable column of one button per sound. Clicks are pushed to `actions`.
pub fn sound_list(
    ui: &mut egui::Ui,
    entries: &[SoundEntry],
    current: Option<&SoundEntry>,
    actions: &mut Vec<Action>,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if entries.is_empty() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("(No sound files in the sounds/ folder)")
                            .color(egui::Color32::GRAY),
                    );
                });
                return;
            }

            for (index, entry) in entries.iter().enumerate() {
                let playing = current.is_some_and(|c| c.path == entry.path);
                let button = egui::Button::new(&entry.display_name).selected(playing);
                let response = ui
                    .add_sized([ui.available_width(), BUTTON_HEIGHT], button)
                    .on_hover_text(entry.file_name());
                if response.clicked() {
                    actions.push(Action::Play(index));
                }
                ui.add_space(4.0);
            }
        });
}
