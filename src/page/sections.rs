//! Section navigation: one section visible at a time, switched by nav links
//! or the keyboard, with a short hand-over delay between them.

use super::stagger::RevealKind;

/// Delay between hiding the old section and showing the new one
pub const SECTION_SWITCH_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Education,
    Works,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Works,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Works => "works",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Works => "Works",
            Section::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Entrance animation run when the section becomes active
    pub fn reveal(self) -> Option<RevealKind> {
        match self {
            Section::Home => None,
            Section::About => Some(RevealKind::SkillBars),
            Section::Education => Some(RevealKind::Timeline),
            Section::Works => Some(RevealKind::ProjectCards),
            Section::Contact => Some(RevealKind::ContactItems),
        }
    }

    /// Where the hero's scroll cue leads. Only Home carries one.
    pub fn scroll_cue(self) -> Option<Section> {
        match self {
            Section::Home => Some(Section::About),
            _ => None,
        }
    }
}

/// Keyboard navigation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowDown / ArrowRight
    Next,
    /// ArrowUp / ArrowLeft
    Previous,
    /// Home
    First,
    /// End
    Last,
}

pub struct SectionNavigator {
    /// Section whose content is shown (None during the hand-over gap)
    visible: Option<Section>,
    /// Last section that finished activating
    current: Section,
    /// Highlighted nav link, updated immediately on click
    selected: Section,
    pending: Option<(Section, u64)>,
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self {
            visible: Some(Section::Home),
            current: Section::Home,
            selected: Section::Home,
            pending: None,
        }
    }

    pub fn visible(&self) -> Option<Section> {
        self.visible
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn selected(&self) -> Section {
        self.selected
    }

    /// Hide the visible section now and schedule `target`.
    pub fn switch_to(&mut self, target: Section, now_ms: u64) {
        let already = match self.pending {
            Some((pending, _)) => pending == target,
            None => self.visible == Some(target),
        };
        self.selected = target;
        if already {
            return;
        }
        self.visible = None;
        self.pending = Some((target, now_ms + SECTION_SWITCH_DELAY_MS));
    }

    /// Keyboard navigation relative to the current section. Ignored while
    /// the loader is up.
    pub fn handle_key(&mut self, key: NavKey, now_ms: u64, loading: bool) -> bool {
        if loading {
            return false;
        }
        let target = match key {
            NavKey::Next => self.current.next(),
            NavKey::Previous => self.current.previous(),
            NavKey::First => Some(Section::Home),
            NavKey::Last => Some(Section::Contact),
        };
        match target {
            Some(section) => {
                self.switch_to(section, now_ms);
                true
            }
            None => false,
        }
    }

    /// Complete a due hand-over. Returns the section that just activated.
    pub fn tick(&mut self, now_ms: u64) -> Option<Section> {
        let (target, due) = self.pending?;
        if now_ms < due {
            return None;
        }
        self.pending = None;
        self.visible = Some(target);
        self.current = target;
        log::debug!("section {} active", target.id());
        Some(target)
    }
}
