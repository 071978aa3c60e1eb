//! Hard-coded profile content shown in the sidebar and sections.

pub const NAME: &str = "Zian";
pub const ROLE: &str = "Frontend Developer";
pub const LOCATION: &str = "Available for remote work";
pub const EMAIL: &str = "hello@zian.dev";

/// Profile stat: label and the value its counter runs to
pub const STATS: [(&str, u32); 3] = [
    ("Projects", 50),
    ("Years Experience", 3),
    ("Happy Clients", 30),
];

/// Skill name and proficiency in percent
pub const SKILLS: [(&str, f32); 5] = [
    ("HTML/CSS", 95.0),
    ("JavaScript", 90.0),
    ("React", 85.0),
    ("UI/UX Design", 80.0),
    ("Rust", 60.0),
];

pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub place: &'static str,
}

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        period: "2020 - 2024",
        title: "B.Sc. Computer Science",
        place: "State University",
    },
    TimelineEntry {
        period: "2022",
        title: "Frontend Internship",
        place: "Studio North",
    },
    TimelineEntry {
        period: "2023",
        title: "UX Design Certificate",
        place: "Online",
    },
];

/// Contact method label and value
pub const CONTACT_METHODS: [(&str, &str); 3] = [
    ("Email", EMAIL),
    ("GitHub", "github.com/zian"),
    ("Location", LOCATION),
];

/// Speeds of the drifting hero shapes (`None` falls back to the default)
pub const FLOAT_SPEEDS: [Option<f32>; 4] = [Some(0.5), Some(0.8), None, Some(1.2)];
