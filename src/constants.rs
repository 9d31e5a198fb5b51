use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Fixed primary key of the single hero_section row.
pub const HERO_SINGLETON_ID: i32 = 1;
pub const DEFAULT_LOCATION: &str = "Rajkot";

// ───── Response messages ───────────────────────────────────────────

pub const HERO_UPDATED_MESSAGE: &str = "Hero section updated successfully";
pub const CONTACT_SENT_MESSAGE: &str = "Your message has been sent successfully!";
pub const ABOUT_NOT_FOUND_MESSAGE: &str = "No About data found";

pub const INVALID_METHOD_MESSAGE: &str = "Invalid request method.";
pub const INVALID_DATA_FORMAT_MESSAGE: &str = "Invalid data format.";
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";
