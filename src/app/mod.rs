//! `PortfolioApp`: the top-level egui application state.
//!
//! This module declares the `PortfolioApp` struct, its constructor and the
//! per-frame `update`. Drawing is split across the sibling sub-modules:
//!
//! - `sidebar`: profile sidebar host, touch routing, overlay and toggle
//! - `navigation`: top bar, nav menu, keyboard shortcuts
//! - `content`: section bodies, project modal, toasts, cursor, loader

pub mod content;
pub mod navigation;
pub mod sidebar;

use std::time::{Duration, Instant};

use eframe::egui;

use portfolio_shell::config::ShellConfig;
use portfolio_shell::mobile::ui::{MobileAction, MobileShell, ShellInput};
use portfolio_shell::mobile::viewport::ViewportSize;
use portfolio_shell::page::boot::{BootEvent, BootSequence, PageClock};
use portfolio_shell::page::contact::ContactForm;
use portfolio_shell::page::counter::CounterAnimation;
use portfolio_shell::page::cursor::{self, CursorTrail, FloatingField};
use portfolio_shell::page::notify::NotificationCenter;
use portfolio_shell::page::profile;
use portfolio_shell::page::projects::{ProjectGallery, PROJECTS};
use portfolio_shell::page::sections::SectionNavigator;
use portfolio_shell::page::stagger::{RevealKind, StaggeredReveal};
use portfolio_shell::page::typing::TypingEffect;

use self::sidebar::EguiSidebar;

// ─── Application state ───────────────────────────────────────────────────────

pub struct PortfolioApp {
    pub config: ShellConfig,
    pub shell: MobileShell<EguiSidebar>,
    pub app_start: Instant,
    pub clock: PageClock,
    pub boot: BootSequence,
    pub nav: SectionNavigator,
    pub reveals: Vec<StaggeredReveal>,
    pub counters: Vec<CounterAnimation>,
    pub typing: TypingEffect,
    pub cursor: CursorTrail,
    pub floating: FloatingField,
    pub gallery: ProjectGallery,
    pub contact: ContactForm,
    pub toasts: NotificationCenter,
    /// A real touch event has been seen; mouse input no longer drives swipes
    pub touch_capable: bool,
    /// Primary button held, for mouse-driven swipes
    pub mouse_down: bool,
    /// The sidebar claimed the current drag; page scrolling is suppressed
    pub scroll_captured: bool,
    /// Modal was opened this frame; the opening click must not close it
    pub modal_just_opened: bool,
    pub last_screen: egui::Vec2,
}

impl PortfolioApp {
    pub fn new(ctx: &egui::Context, config: ShellConfig) -> Self {
        let screen = ctx.screen_rect().size();
        let shell = MobileShell::new(
            &config,
            Some(EguiSidebar::default()),
            ViewportSize::new(screen.x, screen.y),
        );
        let reveals = vec![
            StaggeredReveal::new(RevealKind::SkillBars, profile::SKILLS.len()),
            StaggeredReveal::new(RevealKind::Timeline, profile::TIMELINE.len()),
            StaggeredReveal::new(RevealKind::ProjectCards, PROJECTS.len()),
            StaggeredReveal::new(
                RevealKind::ContactItems,
                profile::CONTACT_METHODS.len() + 4,
            ),
        ];
        let counters = profile::STATS
            .iter()
            .map(|(_, target)| CounterAnimation::new(*target, 0))
            .collect();

        Self {
            config,
            shell,
            app_start: Instant::now(),
            clock: PageClock::new(),
            boot: BootSequence::new(0),
            nav: SectionNavigator::new(),
            reveals,
            counters,
            typing: TypingEffect::default(),
            cursor: CursorTrail::new(),
            floating: FloatingField::new(&profile::FLOAT_SPEEDS),
            gallery: ProjectGallery::new(),
            contact: ContactForm::new(),
            toasts: NotificationCenter::new(),
            touch_capable: false,
            mouse_down: false,
            scroll_captured: false,
            modal_just_opened: false,
            last_screen: screen,
        }
    }

    /// Milliseconds since launch, for input and debouncing.
    pub fn wall_ms(&self) -> u64 {
        self.app_start.elapsed().as_millis() as u64
    }

    /// Animation time; stands still while the window is minimized.
    pub fn page_ms(&self) -> u64 {
        self.clock.now(self.wall_ms())
    }

    pub fn is_mobile(&self) -> bool {
        self.shell.viewport.is_mobile()
    }

    pub fn decorations_enabled(&self) -> bool {
        let width = self.shell.viewport.size().width;
        cursor::effects_enabled(self.touch_capable, width, self.shell.viewport.breakpoint())
    }

    pub fn reveal(&self, kind: RevealKind) -> Option<&StaggeredReveal> {
        self.reveals.iter().find(|r| r.kind() == kind)
    }

    fn start_reveal(&mut self, kind: RevealKind, now: u64) {
        if let Some(r) = self.reveals.iter_mut().find(|r| r.kind() == kind) {
            if !r.is_started() {
                log::debug!("{:?} reveal started at {}ms", kind, now);
            }
            r.start(now);
        }
    }

    pub fn handle_action(&mut self, action: MobileAction) {
        match action {
            MobileAction::CaptureScroll => self.scroll_captured = true,
            MobileAction::SidebarOpened => log::info!("profile sidebar opened"),
            MobileAction::SidebarClosed => log::info!("profile sidebar closed"),
            MobileAction::NavMenu { open } => log::debug!("nav menu open: {}", open),
            MobileAction::None => {}
        }
    }

    /// Feed window size and visibility changes to the shell.
    fn track_viewport(&mut self, ctx: &egui::Context, wall: u64) {
        let screen = ctx.screen_rect().size();
        if screen != self.last_screen {
            self.last_screen = screen;
            let action = self
                .shell
                .process(ShellInput::Resize(ViewportSize::new(screen.x, screen.y)), wall);
            self.handle_action(action);
        }

        let hidden = ctx.input(|i| i.viewport().minimized.unwrap_or(false));
        if hidden != self.clock.is_paused() {
            if hidden {
                self.clock.pause(wall);
            } else {
                self.clock.resume(wall);
            }
            self.shell.process(ShellInput::Visibility { hidden }, wall);
        }

        let action = self.shell.tick(wall);
        self.handle_action(action);
    }

    /// Advance every time-driven page behavior.
    fn tick_page(&mut self, now: u64) {
        for event in self.boot.tick(now) {
            match event {
                BootEvent::LoaderHidden => {
                    if let Some(kind) = self.nav.visible().and_then(|s| s.reveal()) {
                        self.start_reveal(kind, now);
                    }
                }
                BootEvent::TypingStarted => self.typing.start(now),
            }
        }

        if let Some(section) = self.nav.tick(now) {
            if let Some(kind) = section.reveal() {
                self.start_reveal(kind, now);
            }
        }

        self.typing.tick(now);
        if let Some(note) = self.contact.tick(now) {
            self.toasts.push(note, now);
        }
        self.toasts.tick(now);

        if self.decorations_enabled() {
            self.cursor.step();
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let wall = self.wall_ms();
        self.scroll_captured = false;

        self.track_viewport(ctx, wall);
        self.route_input(ctx, wall);
        self.handle_keys(ctx);

        let now = self.page_ms();
        self.tick_page(now);

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            self.draw_nav_bar(ui);
        });

        if !self.is_mobile() {
            egui::SidePanel::left("profile_column")
                .exact_width(self.config.sidebar.panel_width)
                .resizable(false)
                .show(ctx, |ui| {
                    self.draw_profile(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_section(ui);
        });

        if self.is_mobile() {
            self.draw_mobile_sidebar(ctx);
        }
        self.draw_project_modal(ctx);
        self.draw_toasts(ctx);
        self.draw_cursor(ctx);
        self.draw_loader(ctx);

        if !self.shell.viewport.is_hidden() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
