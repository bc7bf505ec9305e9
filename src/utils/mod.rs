pub mod time;

pub use time::{format_hms, format_hms_ms};
