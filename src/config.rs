// Site-wide identity used across pages, so copy changes land in one place.

pub const SOCIETY_NAME: &str = "AISOC";
pub const LOGO_TEXT: &str = "AI";
pub const TAGLINE: &str =
    "Empowering the next generation of AI innovators through education, research, and collaboration.";
pub const CONTACT_EMAIL: &str = "ai.society@university.edu";
pub const OFFICE_LOCATION: &str = "Innovation Lab, Building C, Room 204";
