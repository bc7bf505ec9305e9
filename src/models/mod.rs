pub mod geo;
pub mod session;

pub use geo::{GeoPoint, GeofenceTarget};
pub use session::{AttendanceSession, SessionState};
