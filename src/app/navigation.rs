//! Navigation for `PortfolioApp`.
//!
//! Covers the top bar (inline links on desktop, a collapsible menu on
//! mobile) and the keyboard shortcuts: arrows/Home/End between sections,
//! Escape for the modal and the sidebar.

use eframe::egui;

use portfolio_shell::mobile::ui::ShellInput;
use portfolio_shell::page::profile;
use portfolio_shell::page::sections::{NavKey, Section};

use super::PortfolioApp;

impl PortfolioApp {
    /// Jump to a section from a nav link.
    pub fn go_to(&mut self, section: Section) {
        let now = self.page_ms();
        self.nav.switch_to(section, now);
        let action = self.shell.process(ShellInput::NavLinkTap, self.wall_ms());
        self.handle_action(action);
    }

    pub fn handle_keys(&mut self, ctx: &egui::Context) {
        let (escape, key) = ctx.input(|i| {
            let key = if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::ArrowRight) {
                Some(NavKey::Next)
            } else if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::ArrowLeft) {
                Some(NavKey::Previous)
            } else if i.key_pressed(egui::Key::Home) {
                Some(NavKey::First)
            } else if i.key_pressed(egui::Key::End) {
                Some(NavKey::Last)
            } else {
                None
            };
            (i.key_pressed(egui::Key::Escape), key)
        });

        if escape {
            if self.gallery.modal().is_some() {
                self.gallery.close();
            } else {
                let action = self.shell.process(ShellInput::Escape, self.wall_ms());
                self.handle_action(action);
            }
        }

        // Arrow keys belong to text fields while one has focus
        let typing = ctx.memory(|m| m.focused().is_some());
        if let Some(key) = key.filter(|_| !typing) {
            let now = self.page_ms();
            self.nav.handle_key(key, now, self.boot.is_loading());
        }
    }

    /// Top bar: name, then section links or the mobile menu toggle.
    pub fn draw_nav_bar(&mut self, ui: &mut egui::Ui) {
        let mut clicked: Option<Section> = None;
        let mut toggled = false;

        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(profile::NAME)
                    .size(20.0)
                    .strong()
                    .color(egui::Color32::from_rgb(0, 212, 255)),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.is_mobile() {
                    let icon = if self.shell.nav_menu_open() { "\u{2715}" } else { "\u{2630}" };
                    if ui
                        .add(egui::Button::new(egui::RichText::new(icon).size(18.0)).min_size(egui::vec2(44.0, 44.0)))
                        .clicked()
                    {
                        toggled = true;
                    }
                } else {
                    for section in Section::ALL.iter().rev() {
                        let selected = self.nav.selected() == *section;
                        let response = ui.selectable_label(selected, section.title());
                        self.cursor.hovering_link |= response.hovered();
                        if response.clicked() {
                            clicked = Some(*section);
                        }
                    }
                }
            });
        });

        if self.is_mobile() && self.shell.nav_menu_open() {
            ui.separator();
            for section in Section::ALL {
                let selected = self.nav.selected() == section;
                let response = ui.add_sized(
                    [ui.available_width(), 44.0],
                    egui::SelectableLabel::new(selected, section.title()),
                );
                if response.clicked() {
                    clicked = Some(section);
                }
            }
        }

        if toggled {
            let action = self.shell.process(ShellInput::NavToggleTap, self.wall_ms());
            self.handle_action(action);
        } else if ui.input(|i| i.pointer.primary_clicked()) && !ui.ui_contains_pointer() && clicked.is_none() {
            let action = self.shell.process(ShellInput::OutsideTap, self.wall_ms());
            self.handle_action(action);
        }

        if let Some(section) = clicked {
            self.go_to(section);
        }
    }
}
