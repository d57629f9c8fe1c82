//! Application constants and configuration

pub const APP_NAME: &str = "Liquid Class Library";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL used when the remote source is selected without an explicit URL
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment override forcing the remote source
pub const API_URL_ENV: &str = "LIQUID_CLASS_API_URL";

/// Path segments of the liquid-class server endpoints
pub const LIQUID_CLASS_SEGMENTS: [&str; 2] = ["api", "liquid-class"];
pub const LIQUIDS_SEGMENTS: [&str; 2] = ["api", "liquids"];
pub const LIQUID_CLASSES_SEGMENTS: [&str; 2] = ["api", "liquid-classes"];
pub const LIQUID_CLASS_QUERY: &str = "liquid_class";

/// Rendered in place of a missing molar weight
pub const UNKNOWN_MOLAR_WEIGHT: &str = "—";

/// Toast timings in seconds
pub const TOAST_VISIBLE_SECS: f32 = 4.0;
pub const TOAST_FADE_SECS: f32 = 0.5;
