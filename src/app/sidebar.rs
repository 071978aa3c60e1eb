//! Profile sidebar for `PortfolioApp`.
//!
//! Translates egui touch and mouse events into sidebar gestures, and paints
//! the panel, dimming overlay and toggle button from the controller's
//! latest `SidebarFrame`.

use eframe::egui;

use portfolio_shell::mobile::frame::SidebarFrame;
use portfolio_shell::mobile::sidebar::SidebarHost;
use portfolio_shell::mobile::touch::{Bounds, TouchPoint};
use portfolio_shell::mobile::ui::ShellInput;
use portfolio_shell::page::notify::Notification;
use portfolio_shell::page::profile;

use super::PortfolioApp;

/// Contact id used when the mouse stands in for a finger
const MOUSE_CONTACT: u64 = u64::MAX;
/// Snap animation after release
const SNAP_SECS: f32 = 0.3;
const TOGGLE_SIZE: f32 = 48.0;

/// Sidebar host backed by egui: keeps the frame to paint next.
#[derive(Default)]
pub struct EguiSidebar {
    pub frame: Option<SidebarFrame>,
}

impl SidebarHost for EguiSidebar {
    fn apply(&mut self, frame: &SidebarFrame) {
        self.frame = Some(*frame);
    }

    fn vibrate(&mut self, duration_ms: u32) {
        log::trace!("no haptics on this platform; {}ms pulse dropped", duration_ms);
    }
}

impl PortfolioApp {
    pub(super) fn sidebar_frame(&self) -> SidebarFrame {
        self.shell
            .sidebar
            .host()
            .and_then(|h| h.frame)
            .unwrap_or_else(|| self.shell.sidebar.frame())
    }

    /// Route this frame's touch events (or mouse drags on machines without
    /// touch) to the shell.
    pub fn route_input(&mut self, ctx: &egui::Context, wall: u64) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            let input = match event {
                egui::Event::Touch { id, phase, pos, .. } => {
                    self.touch_capable = true;
                    let point = TouchPoint::new(pos.x, pos.y, id.0, wall);
                    match phase {
                        egui::TouchPhase::Start => ShellInput::TouchStart(point),
                        egui::TouchPhase::Move => ShellInput::TouchMove(point),
                        egui::TouchPhase::End => ShellInput::TouchEnd(point),
                        egui::TouchPhase::Cancel => ShellInput::TouchCancel(id.0),
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } if !self.touch_capable => {
                    self.mouse_down = pressed;
                    let point = TouchPoint::new(pos.x, pos.y, MOUSE_CONTACT, wall);
                    if pressed {
                        ShellInput::TouchStart(point)
                    } else {
                        ShellInput::TouchEnd(point)
                    }
                }
                egui::Event::PointerMoved(pos) if !self.touch_capable && self.mouse_down => {
                    ShellInput::TouchMove(TouchPoint::new(pos.x, pos.y, MOUSE_CONTACT, wall))
                }
                egui::Event::PointerGone if self.mouse_down => {
                    self.mouse_down = false;
                    ShellInput::TouchCancel(MOUSE_CONTACT)
                }
                _ => continue,
            };
            let action = self.shell.process(input, wall);
            self.handle_action(action);
        }
    }

    /// Overlay, sliding panel and toggle button (mobile layout only).
    pub fn draw_mobile_sidebar(&mut self, ctx: &egui::Context) {
        let frame = self.sidebar_frame();
        let screen = ctx.screen_rect();
        let wall = self.wall_ms();

        let secs = if frame.animate { SNAP_SECS } else { 0.0 };
        let offset = ctx.animate_value_with_time(egui::Id::new("sidebar_offset"), frame.panel_offset, secs);
        let dim = ctx.animate_value_with_time(egui::Id::new("sidebar_dim"), frame.overlay_opacity, secs);

        if frame.overlay_visible || dim > 0.001 {
            egui::Area::new(egui::Id::new("sidebar_overlay"))
                .order(egui::Order::Middle)
                .fixed_pos(screen.min)
                .show(ctx, |ui| {
                    let response = ui.allocate_rect(screen, egui::Sense::click());
                    ui.painter().rect_filled(
                        screen,
                        0.0,
                        egui::Color32::from_black_alpha((dim * 255.0) as u8),
                    );
                    if response.clicked() {
                        let action = self.shell.process(ShellInput::OverlayTap, wall);
                        self.handle_action(action);
                    }
                });
        }

        let width = self.config.sidebar.panel_width;
        if offset > -width + 0.5 {
            egui::Area::new(egui::Id::new("profile_sidebar"))
                .order(egui::Order::Foreground)
                .fixed_pos(egui::pos2(screen.min.x + offset, screen.min.y))
                .show(ctx, |ui| {
                    egui::Frame::side_top_panel(ui.style()).show(ui, |ui| {
                        ui.set_width(width);
                        ui.set_min_height(screen.height());
                        self.draw_profile(ui);
                    });
                });
        }

        if frame.toggle_visible && self.shell.sidebar.toggle_usable() {
            let pos = egui::pos2(screen.max.x - TOGGLE_SIZE - 16.0, screen.max.y - TOGGLE_SIZE - 16.0);
            egui::Area::new(egui::Id::new("sidebar_toggle"))
                .order(egui::Order::Foreground)
                .fixed_pos(pos)
                .show(ctx, |ui| {
                    let button = egui::Button::new(egui::RichText::new("\u{1F464}").size(20.0))
                        .min_size(egui::vec2(TOGGLE_SIZE, TOGGLE_SIZE))
                        .rounding(TOGGLE_SIZE * 0.5);
                    let response = ui.add(button).on_hover_text("View Profile");
                    let r = response.rect;
                    self.shell
                        .sidebar
                        .set_toggle_bounds(Some(Bounds::new(r.min.x, r.min.y, r.width(), r.height())));
                    if response.clicked() {
                        let action = self.shell.process(ShellInput::ToggleTap, wall);
                        self.handle_action(action);
                    }
                });
        } else {
            self.shell.sidebar.set_toggle_bounds(None);
        }
    }

    /// Profile card: avatar, name, stats and resume download.
    pub fn draw_profile(&mut self, ui: &mut egui::Ui) {
        let now = self.page_ms();
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(96.0, 96.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 48.0, egui::Color32::from_rgb(0, 212, 255));
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &profile::NAME[..1],
                egui::FontId::proportional(40.0),
                egui::Color32::WHITE,
            );
            ui.add_space(12.0);
            ui.heading(egui::RichText::new(profile::NAME).size(24.0).strong());
            ui.label(egui::RichText::new(profile::ROLE).color(egui::Color32::from_rgb(0, 212, 255)));
            ui.label(egui::RichText::new(profile::LOCATION).size(12.0).weak());
        });

        ui.add_space(16.0);
        ui.separator();
        ui.columns(profile::STATS.len(), |cols| {
            for (i, ((label, _), counter)) in profile::STATS.iter().zip(&self.counters).enumerate() {
                cols[i].vertical_centered(|ui| {
                    ui.label(egui::RichText::new(counter.value_at(now).to_string()).size(22.0).strong());
                    ui.label(egui::RichText::new(*label).size(11.0).weak());
                });
            }
        });
        ui.separator();
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            if ui.button("Download Resume").clicked() {
                log::info!("resume requested: {}", portfolio_shell::page::notify::RESUME_FILE_NAME);
                self.toasts.push(Notification::resume_download(), now);
            }
        });
    }
}
