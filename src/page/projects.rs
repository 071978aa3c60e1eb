//! Project showcase: catalog, category filter, detail modal and links.

/// Taps shorter than this open the project modal
pub const CARD_TAP_MAX_MS: u64 = 500;
/// Fade-in of cards after a filter change
pub const CARD_FADE_MS: u64 = 500;

pub const PROFILE_REPOSITORY_URL: &str = "https://github.com/zian";
pub const LIVE_DEMO_URL: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Web,
    Mobile,
    Design,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Design => "UI/UX",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    repository: Option<&'static str>,
    design: Option<&'static str>,
}

impl Project {
    /// Source repository, or the profile page when the project has none.
    pub fn repository_url(&self) -> &'static str {
        self.repository.unwrap_or(PROFILE_REPOSITORY_URL)
    }

    /// Design file for design-only projects.
    pub fn design_url(&self) -> Option<&'static str> {
        self.design
    }
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: "ecommerce",
        title: "E-commerce Platform",
        category: Category::Web,
        description: "A comprehensive e-commerce solution built with modern technologies...",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=400&fit=crop",
        tech: &["React", "Node.js", "MongoDB", "Stripe API"],
        features: &["User Authentication", "Payment Processing", "Admin Dashboard", "Responsive Design"],
        repository: Some("https://github.com/zian/ecommerce-platform"),
        design: None,
    },
    Project {
        id: "banking",
        title: "Banking App UI Design",
        category: Category::Design,
        description: "Modern and secure banking application interface...",
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&h=400&fit=crop",
        tech: &["Figma", "UI/UX", "Prototyping"],
        features: &["User Research", "Wireframing", "Prototyping", "User Testing"],
        repository: None,
        design: Some("https://figma.com/zian/banking-app"),
    },
    Project {
        id: "taskmanager",
        title: "Task Management App",
        category: Category::Web,
        description: "Collaborative task management tool with real-time updates...",
        image: "https://images.unsplash.com/photo-1504639725590-34d0984388bd?w=800&h=400&fit=crop",
        tech: &["Vue.js", "Firebase", "PWA"],
        features: &["Real-time Updates", "Team Collaboration", "Offline Support", "Push Notifications"],
        repository: Some("https://github.com/zian/task-manager"),
        design: None,
    },
    Project {
        id: "weather",
        title: "Weather Forecast App",
        category: Category::Mobile,
        description: "Beautiful weather application with location-based forecasts...",
        image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&h=400&fit=crop",
        tech: &["React Native", "API Integration", "Geolocation"],
        features: &["Location Detection", "7-day Forecast", "Weather Maps", "Severe Weather Alerts"],
        repository: Some("https://github.com/zian/weather-app"),
        design: None,
    },
];

pub fn find(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(Category),
}

impl ProjectFilter {
    pub const CHOICES: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(Category::Web),
        ProjectFilter::Only(Category::Mobile),
        ProjectFilter::Only(Category::Design),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(c) => project.category == c,
        }
    }
}

/// Filter buttons, visible cards and the detail modal.
#[derive(Debug, Clone, Default)]
pub struct ProjectGallery {
    filter: ProjectFilter,
    filtered_at_ms: Option<u64>,
    modal: Option<&'static Project>,
}

impl ProjectGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter, now_ms: u64) {
        self.filter = filter;
        self.filtered_at_ms = Some(now_ms);
    }

    pub fn visible(&self) -> impl Iterator<Item = &'static Project> + '_ {
        PROJECTS.iter().filter(move |p| self.filter.matches(p))
    }

    /// Opacity of visible cards after the last filter change.
    pub fn card_opacity(&self, now_ms: u64) -> f32 {
        match self.filtered_at_ms {
            Some(at) => (now_ms.saturating_sub(at) as f32 / CARD_FADE_MS as f32).min(1.0),
            None => 1.0,
        }
    }

    /// Show the modal for `id`. Unknown ids leave the modal untouched.
    pub fn open(&mut self, id: &str) -> bool {
        match find(id) {
            Some(project) => {
                self.modal = Some(project);
                true
            }
            None => {
                log::debug!("no project with id {:?}", id);
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.modal = None;
    }

    pub fn modal(&self) -> Option<&'static Project> {
        self.modal
    }

    /// Touch on a card: short taps open the modal.
    pub fn card_tap(&mut self, id: &str, down_ms: u64, up_ms: u64) -> bool {
        up_ms.saturating_sub(down_ms) < CARD_TAP_MAX_MS && self.open(id)
    }
}
