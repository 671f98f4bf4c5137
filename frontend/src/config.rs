use log::Level;

pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xzznqnve";

// Stats strip count-up timing
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.1;

// Nav switches to the solid background past this many pixels
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
pub const NAV_CLOSE_DELAY_MS: u32 = 150;

pub const PHONE_NUMBERS: &[(&str, &str)] = &[
    ("+919778233168", "+91 97782 33168"),
    ("+919037094071", "+91 90370 94071"),
];

pub const WHATSAPP_NUMBER: &str = "919876543210";
pub const WHATSAPP_GREETING: &str = "Hello Hevora Technologies, I am interested in your services.";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/hevoratechnologies?igsh=MXJyaHRnMTV4dWxjMA==";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/hevora-technologies-605196390/";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
