use std::collections::VecDeque;
use std::time::Duration;

use eframe::egui;

use crate::soundboard::{Action, Soundboard};
use crate::types::notice::Notice;
use crate::ui::dialogs::show_notice;
use crate::ui::sound_list::sound_list;

// How often to check for a sound ending on its own.
const PLAYBACK_POLL: Duration = Duration::from_millis(250);

pub struct SoundboardApp {
    pub app_name: String,
    pub soundboard: Soundboard,
    notices: VecDeque<Notice>,
    first_frame_shown: bool,
}

impl SoundboardApp {
    pub fn new(app_name: String, soundboard: Soundboard, startup_notices: Vec<Notice>) -> Self {
        Self {
            app_name,
            soundboard,
            notices: startup_notices.into(),
            first_frame_shown: false,
        }
    }

    fn run(&mut self, actions: Vec<Action>) {
        for action in actions {
            if let Some(notice) = self.soundboard.dispatch(action) {
                self.notices.push_back(notice);
            }
        }
    }
}

impl eframe::App for SoundboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.soundboard.poll();

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading(egui::RichText::new(&self.app_name).strong());
                ui.label("Put .mp3 or .wav files in the sounds/ folder");
                ui.add_space(6.0);
            });

            ui.horizontal(|ui| {
                if ui.button("Stop").clicked() {
                    actions.push(Action::Stop);
                }
                if ui.button("Refresh").clicked() {
                    actions.push(Action::Refresh);
                }
                let open = ui
                    .button("Open Folder")
                    .on_hover_text(self.soundboard.sound_dir().display().to_string());
                if open.clicked() {
                    actions.push(Action::OpenFolder);
                }
            });

            ui.horizontal(|ui| {
                let mut volume = self.soundboard.volume();
                let slider = egui::Slider::new(&mut volume, 0.0..=1.0).text("Volume");
                if ui.add(slider).changed() {
                    actions.push(Action::SetVolume(volume));
                }
            });

            let status = match self.soundboard.state().current() {
                Some(entry) => format!("Now playing: {}", entry.display_name),
                None => "Idle".to_string(),
            };
            ui.label(egui::RichText::new(status).small().color(egui::Color32::GRAY));
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            sound_list(
                ui,
                self.soundboard.entries(),
                self.soundboard.state().current(),
                &mut actions,
            );
        });

        self.run(actions);

        if self.soundboard.state().is_playing() {
            ctx.request_repaint_after(PLAYBACK_POLL);
        }

        // Dialogs block, so wait until the window has content behind them.
        if !self.first_frame_shown {
            self.first_frame_shown = true;
            if !self.notices.is_empty() {
                ctx.request_repaint();
            }
            return;
        }
        if let Some(notice) = self.notices.pop_front() {
            show_notice(&notice);
            ctx.request_repaint();
        }
    }
}
