pub mod ticker;
pub mod tracker;

pub use ticker::Ticker;
pub use tracker::{CheckIn, SessionSummary, Tracker};
