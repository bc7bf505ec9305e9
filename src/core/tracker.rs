use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceSession, GeoPoint, GeofenceTarget, SessionState};
use crate::utils::time::format_hms;
use chrono::{DateTime, Duration, Local};
use serde::Serialize;

/// Geofence-gated attendance tracker: one session per tracker, mutated only
/// through `request_check_in` and `check_out`.
#[derive(Debug)]
pub struct Tracker {
    target: GeofenceTarget,
    session: AttendanceSession,
}

/// Result of an accepted check-in.
#[derive(Debug, Clone, Copy)]
pub struct CheckIn {
    pub at: DateTime<Local>,
    pub distance_meters: f64,
}

/// Snapshot handed to the presentation layer (and to `--json` output).
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub state: SessionState,
    pub checked_in_at: Option<String>,
    pub checked_out_at: Option<String>,
    pub elapsed: String,
}

impl Tracker {
    pub fn new(target: GeofenceTarget) -> Self {
        Self {
            target,
            session: AttendanceSession::new(),
        }
    }

    pub fn target(&self) -> &GeofenceTarget {
        &self.target
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Admit a check-in if `location` lies inside the geofence.
    ///
    /// Only valid while Idle. The distance gate is inclusive: a point at
    /// exactly the radius is admitted. On rejection the session is left
    /// untouched and the measured distance is reported back.
    pub fn request_check_in(
        &mut self,
        location: GeoPoint,
        now: DateTime<Local>,
    ) -> AppResult<CheckIn> {
        if self.session.state() != SessionState::Idle {
            return Err(AppError::InvalidTransition {
                operation: "check in",
                state: self.session.state().as_str(),
            });
        }

        let distance = self.target.distance_to(&location);
        if distance > self.target.radius_meters {
            return Err(AppError::OutOfRange {
                distance_meters: distance,
                radius_meters: self.target.radius_meters,
            });
        }

        self.session.check_in(now)?;
        Ok(CheckIn {
            at: now,
            distance_meters: distance,
        })
    }

    /// Close the running session. Returns the frozen elapsed duration.
    pub fn check_out(&mut self, now: DateTime<Local>) -> AppResult<Duration> {
        self.session.check_out(now)
    }

    /// Pull-based elapsed query; safe to call from a ticker or on demand.
    pub fn elapsed(&self, now: DateTime<Local>) -> Duration {
        self.session.elapsed(now)
    }

    pub fn summary(&self, now: DateTime<Local>) -> SessionSummary {
        SessionSummary {
            state: self.session.state(),
            checked_in_at: self.session.started_at().map(|t| t.to_rfc3339()),
            checked_out_at: self.session.checked_out_at().map(|t| t.to_rfc3339()),
            elapsed: format_hms(self.session.elapsed(now)),
        }
    }
}
