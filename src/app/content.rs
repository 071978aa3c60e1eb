//! Section bodies and page-wide overlays for `PortfolioApp`.

use eframe::egui;

use portfolio_shell::page::contact::{Field, SubmitState};
use portfolio_shell::page::cursor::{DOT_RADIUS, RING_RADIUS};
use portfolio_shell::page::notify::NoticeKind;
use portfolio_shell::page::profile;
use portfolio_shell::page::projects::{Project, ProjectFilter, LIVE_DEMO_URL};
use portfolio_shell::page::sections::Section;
use portfolio_shell::page::stagger::{ItemStyle, RevealKind, StaggeredReveal};

use super::PortfolioApp;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 255);
const TOAST_WIDTH: f32 = 280.0;

/// Paint `add_contents` faded and pushed down by a reveal style.
fn revealed<R>(ui: &mut egui::Ui, style: ItemStyle, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.add_space(style.translate_y);
    ui.scope(|ui| {
        ui.set_opacity(style.opacity);
        add_contents(ui)
    })
    .inner
}

fn item_style(reveal: Option<&StaggeredReveal>, index: usize, now: u64) -> ItemStyle {
    match reveal {
        Some(r) if !r.is_complete(now) => r.item(index, now),
        _ => ItemStyle::SHOWN,
    }
}

impl PortfolioApp {
    pub fn draw_section(&mut self, ui: &mut egui::Ui) {
        let Some(section) = self.nav.visible() else {
            // hand-over gap between two sections
            return;
        };

        let locked = self.scroll_captured || self.sidebar_frame().scroll_locked;
        egui::ScrollArea::vertical()
            .id_salt(section.id())
            .enable_scrolling(!locked)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(16.0);
                ui.heading(egui::RichText::new(section.title()).size(28.0).strong());
                ui.add_space(12.0);
                match section {
                    Section::Home => self.draw_home(ui),
                    Section::About => self.draw_about(ui),
                    Section::Education => self.draw_education(ui),
                    Section::Works => self.draw_works(ui),
                    Section::Contact => self.draw_contact(ui),
                }
            });
    }

    fn draw_home(&mut self, ui: &mut egui::Ui) {
        let now = self.page_ms();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 220.0), egui::Sense::hover());

        if self.decorations_enabled() {
            for i in 0..self.floating.len() {
                let [px, py] = self.floating.position(i, now);
                let center = egui::pos2(
                    rect.min.x + rect.width() * px / 100.0,
                    rect.min.y + rect.height() * py / 100.0,
                );
                ui.painter()
                    .circle_filled(center, 18.0 + 6.0 * i as f32, ACCENT.gamma_multiply(0.12));
            }
        }

        let caret = if self.typing.caret_visible(now) { "|" } else { " " };
        ui.painter().text(
            rect.left_center() + egui::vec2(8.0, -28.0),
            egui::Align2::LEFT_CENTER,
            format!("Hi, I'm {}", profile::NAME),
            egui::FontId::proportional(36.0),
            ui.visuals().strong_text_color(),
        );
        ui.painter().text(
            rect.left_center() + egui::vec2(8.0, 24.0),
            egui::Align2::LEFT_CENTER,
            format!("{}{}", self.typing.text(), caret),
            egui::FontId::monospace(22.0),
            ACCENT,
        );

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let works = ui.button("View My Work");
            let contact = ui.button("Get In Touch");
            self.cursor.hovering_link |= works.hovered() || contact.hovered();
            if works.clicked() {
                self.go_to(Section::Works);
            } else if contact.clicked() {
                self.go_to(Section::Contact);
            }
        });

        if let Some(target) = Section::Home.scroll_cue() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                let cue = ui
                    .add(
                        egui::Label::new(egui::RichText::new("Scroll \u{2193}").size(13.0).weak())
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                self.cursor.hovering_link |= cue.hovered();
                if cue.clicked() {
                    self.go_to(target);
                }
            });
        }
    }

    fn draw_about(&mut self, ui: &mut egui::Ui) {
        let now = self.page_ms();
        let reveal = self.reveal(RevealKind::SkillBars).cloned();

        ui.label(format!(
            "{} is a {} who builds fast, accessible interfaces.",
            profile::NAME,
            profile::ROLE.to_lowercase()
        ));
        ui.add_space(12.0);
        ui.label(egui::RichText::new("Skills").size(18.0).strong());

        for (i, (skill, percent)) in profile::SKILLS.iter().enumerate() {
            let width = reveal.as_ref().map_or(*percent, |r| r.bar_width(i, *percent, now));
            ui.horizontal(|ui| {
                ui.label(*skill);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{}%", percent.round() as u32));
                });
            });
            ui.add(
                egui::ProgressBar::new(width / 100.0)
                    .desired_height(8.0)
                    .fill(ACCENT),
            );
            ui.add_space(6.0);
        }
    }

    fn draw_education(&mut self, ui: &mut egui::Ui) {
        let now = self.page_ms();
        let reveal = self.reveal(RevealKind::Timeline).cloned();

        for (i, entry) in profile::TIMELINE.iter().enumerate() {
            revealed(ui, item_style(reveal.as_ref(), i, now), |ui| {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(entry.period).color(ACCENT).size(12.0));
                    ui.label(egui::RichText::new(entry.title).strong());
                    ui.label(egui::RichText::new(entry.place).weak());
                });
            });
            ui.add_space(8.0);
        }
    }

    fn draw_works(&mut self, ui: &mut egui::Ui) {
        let now = self.page_ms();
        let reveal = self.reveal(RevealKind::ProjectCards).cloned();

        ui.horizontal_wrapped(|ui| {
            for choice in ProjectFilter::CHOICES {
                let response = ui.selectable_label(self.gallery.filter() == choice, choice.label());
                self.cursor.hovering_link |= response.hovered();
                if response.clicked() && self.gallery.filter() != choice {
                    self.gallery.set_filter(choice, now);
                }
            }
        });
        ui.add_space(12.0);

        let opacity = self.gallery.card_opacity(now);
        let projects: Vec<&'static Project> = self.gallery.visible().collect();
        let mut tapped: Option<(&'static str, egui::Response)> = None;

        for (i, project) in projects.into_iter().enumerate() {
            let mut style = item_style(reveal.as_ref(), i, now);
            style.opacity *= opacity;
            let response = revealed(ui, style, |ui| {
                egui::Frame::group(ui.style())
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(project.title).size(18.0).strong());
                        ui.label(egui::RichText::new(project.category.label()).color(ACCENT).size(12.0));
                        ui.label(project.description);
                        ui.horizontal_wrapped(|ui| {
                            for tech in project.tech {
                                ui.label(egui::RichText::new(*tech).monospace().size(11.0));
                            }
                        });
                    })
                    .response
                    .interact(egui::Sense::click())
            });
            self.cursor.hovering_link |= response.hovered();
            if response.clicked() {
                tapped = Some((project.id, response));
            }
            ui.add_space(10.0);
        }

        if let Some((id, response)) = tapped {
            let opened = if self.touch_capable {
                // long presses scroll the list instead of opening the card
                let (down, up) = response.ctx.input(|i| {
                    let up = i.time;
                    (i.pointer.press_start_time().unwrap_or(up), up)
                });
                self.gallery.card_tap(id, (down * 1000.0) as u64, (up * 1000.0) as u64)
            } else {
                self.gallery.open(id)
            };
            self.modal_just_opened = opened;
        }
    }

    fn draw_contact(&mut self, ui: &mut egui::Ui) {
        let now = self.page_ms();
        let reveal = self.reveal(RevealKind::ContactItems).cloned();

        for (i, (label, value)) in profile::CONTACT_METHODS.iter().enumerate() {
            revealed(ui, item_style(reveal.as_ref(), i, now), |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(*label).strong());
                    ui.label(*value);
                });
            });
        }
        ui.add_space(16.0);

        let offset = profile::CONTACT_METHODS.len();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            let style = item_style(reveal.as_ref(), offset + i, now);
            let focused = self.contact.is_focused(field);
            let response = revealed(ui, style, |ui| {
                let label = egui::RichText::new(field.label()).size(12.0);
                ui.label(if focused { label.color(ACCENT) } else { label });
                let text = self.contact.value_mut(field);
                let edit = if field == Field::Message {
                    egui::TextEdit::multiline(text).desired_rows(5)
                } else {
                    egui::TextEdit::singleline(text)
                };
                ui.add(edit.desired_width(f32::INFINITY))
            });
            if response.gained_focus() {
                self.contact.focus(field);
            }
            if response.lost_focus() {
                self.contact.blur(field);
            }
            ui.add_space(6.0);
        }

        ui.add_space(8.0);
        let button = ui.add_enabled(
            self.contact.state() == SubmitState::Idle,
            egui::Button::new(self.contact.button_label()).min_size(egui::vec2(160.0, 36.0)),
        );
        self.cursor.hovering_link |= button.hovered();
        if button.clicked() && self.contact.submit(now) {
            log::info!("contact form submitted");
        }
    }

    /// Detail window for the selected project. Clicks outside close it.
    pub fn draw_project_modal(&mut self, ctx: &egui::Context) {
        let Some(project) = self.gallery.modal() else {
            return;
        };

        let mut open = true;
        let mut link: Option<&'static str> = None;
        let shown = egui::Window::new(project.title)
            .id(egui::Id::new("project_modal"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .default_width(460.0)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(project.category.label()).color(ACCENT));
                ui.add_space(6.0);
                ui.label(project.description);
                ui.add_space(10.0);

                ui.label(egui::RichText::new("Technologies").strong());
                ui.horizontal_wrapped(|ui| {
                    for tech in project.tech {
                        ui.label(egui::RichText::new(*tech).monospace());
                    }
                });
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Key Features").strong());
                for feature in project.features {
                    ui.label(format!("\u{2022} {}", feature));
                }
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button("Live Demo").clicked() {
                        link = Some(LIVE_DEMO_URL);
                    }
                    if ui.button("View Code").clicked() {
                        link = Some(project.repository_url());
                    }
                    if let Some(design) = project.design_url() {
                        if ui.button("View Design").clicked() {
                            link = Some(design);
                        }
                    }
                });
            });

        match link {
            Some(LIVE_DEMO_URL) => log::info!("{} has no live demo deployed", project.id),
            Some(url) => ctx.open_url(egui::OpenUrl::new_tab(url)),
            None => {}
        }

        let clicked_outside = ctx.input(|i| {
            i.pointer.primary_clicked()
                && match (i.pointer.interact_pos(), &shown) {
                    (Some(pos), Some(window)) => !window.response.rect.contains(pos),
                    _ => false,
                }
        });

        if !open || (clicked_outside && !self.modal_just_opened) {
            self.gallery.close();
        }
        self.modal_just_opened = false;
    }

    /// Toast stack in the top-right corner.
    pub fn draw_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }
        let now = self.page_ms();
        let screen = ctx.screen_rect();

        for (i, toast) in self.toasts.toasts().iter().enumerate() {
            let slide = toast.offset(now) * (TOAST_WIDTH + 24.0);
            let pos = egui::pos2(
                screen.max.x - TOAST_WIDTH - 16.0 + slide,
                screen.min.y + 72.0 + i as f32 * 64.0,
            );
            let (icon, color) = match toast.notification.kind {
                NoticeKind::Success => ("\u{2714}", egui::Color32::from_rgb(46, 204, 113)),
                NoticeKind::Info => ("\u{2139}", ACCENT),
            };
            egui::Area::new(egui::Id::new(("toast", toast.id)))
                .order(egui::Order::Tooltip)
                .fixed_pos(pos)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_width(TOAST_WIDTH);
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icon).color(color));
                            ui.label(&toast.notification.message);
                        });
                    });
                });
        }
    }

    /// Trailing dot and ring that replace the system pointer on desktop.
    pub fn draw_cursor(&mut self, ctx: &egui::Context) {
        // hover flags are collected again while the next frame draws
        let hovering = std::mem::take(&mut self.cursor.hovering_link);
        if !self.decorations_enabled() {
            return;
        }
        if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
            self.cursor.pointer_moved(pos.x, pos.y);
        }
        ctx.set_cursor_icon(egui::CursorIcon::None);

        let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Tooltip, egui::Id::new("cursor")));
        let [dx, dy] = self.cursor.dot_center();
        let [rx, ry] = self.cursor.ring_center();
        let scale = if hovering { 1.5 } else { 1.0 };
        painter.circle_stroke(
            egui::pos2(rx, ry),
            RING_RADIUS * scale,
            egui::Stroke::new(1.5, ACCENT.gamma_multiply(0.6)),
        );
        painter.circle_filled(egui::pos2(dx, dy), DOT_RADIUS, ACCENT);
    }

    /// Full-screen loader shown until boot hides it.
    pub fn draw_loader(&mut self, ctx: &egui::Context) {
        if !self.boot.is_loading() {
            return;
        }
        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("loader"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                // swallow clicks aimed at the page underneath
                ui.allocate_rect(screen, egui::Sense::click_and_drag());
                ui.painter()
                    .rect_filled(screen, 0.0, ui.visuals().window_fill());
                ui.painter().text(
                    screen.center() - egui::vec2(0.0, 24.0),
                    egui::Align2::CENTER_CENTER,
                    profile::NAME,
                    egui::FontId::proportional(40.0),
                    ACCENT,
                );
                let spinner = egui::Rect::from_center_size(screen.center() + egui::vec2(0.0, 32.0), egui::vec2(28.0, 28.0));
                ui.put(spinner, egui::Spinner::new().size(28.0).color(ACCENT));
            });
    }
}
