/// Section anchors in document order. The first one is active on load.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "projects", "skills", "contact"];

/// Nav entries as `(section id, label)`.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// Below this offset the floating nav is always shown.
pub const HIDE_THRESHOLD_PX: f64 = 100.0;

/// Share of a section that has to be on screen before it animates in.
pub const REVEAL_AMOUNT: f64 = 0.2;
pub const PROJECTS_REVEAL_AMOUNT: f64 = 0.1;

pub const TOAST_DURATION_MS: u32 = 4000;

pub fn reveal_amount(section_id: &str) -> f64 {
    match section_id {
        "projects" => PROJECTS_REVEAL_AMOUNT,
        _ => REVEAL_AMOUNT,
    }
}

#[cfg(debug_assertions)]
pub fn get_relay_url() -> &'static str {
    "http://localhost:3001/api/v1.0/email/send" // local relay stub when running trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_relay_url() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

pub fn relay_service_id() -> &'static str {
    option_env!("EMAIL_SERVICE_ID").unwrap_or("service_portfolio")
}

pub fn relay_template_id() -> &'static str {
    option_env!("EMAIL_TEMPLATE_ID").unwrap_or("template_contact")
}

pub fn relay_public_key() -> &'static str {
    option_env!("EMAIL_PUBLIC_KEY").unwrap_or("")
}
