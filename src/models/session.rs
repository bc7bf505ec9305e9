use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Idle,
    Running,
    CheckedOut,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Running => "running",
            SessionState::CheckedOut => "checked-out",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running)
    }
}

/// One check-in-to-check-out cycle.
///
/// Invariants: `started_at` is set iff state != Idle, `checked_out_at` is set
/// iff state = CheckedOut, and `checked_out_at >= started_at` when both are
/// present. CheckedOut is terminal; a new session means a new value.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceSession {
    state: SessionState,
    started_at: Option<DateTime<Local>>,
    checked_out_at: Option<DateTime<Local>>,
}

impl Default for AttendanceSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            started_at: None,
            checked_out_at: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn checked_out_at(&self) -> Option<DateTime<Local>> {
        self.checked_out_at
    }

    /// Idle -> Running. Rejected in any other state.
    pub fn check_in(&mut self, now: DateTime<Local>) -> AppResult<()> {
        if self.state != SessionState::Idle {
            return Err(AppError::InvalidTransition {
                operation: "check in",
                state: self.state.as_str(),
            });
        }
        self.state = SessionState::Running;
        self.started_at = Some(now);
        self.checked_out_at = None;
        Ok(())
    }

    /// Running -> CheckedOut (terminal). Returns the frozen elapsed duration.
    pub fn check_out(&mut self, now: DateTime<Local>) -> AppResult<Duration> {
        if self.state != SessionState::Running {
            return Err(AppError::InvalidTransition {
                operation: "check out",
                state: self.state.as_str(),
            });
        }
        self.state = SessionState::CheckedOut;
        self.checked_out_at = Some(now);
        Ok(self.elapsed(now))
    }

    /// Elapsed working time. Zero while Idle, live while Running, frozen at
    /// `checked_out_at - started_at` once CheckedOut (`now` is ignored then).
    pub fn elapsed(&self, now: DateTime<Local>) -> Duration {
        match self.state {
            SessionState::Idle => Duration::zero(),
            SessionState::Running => now - self.started_at.unwrap_or(now),
            SessionState::CheckedOut => match (self.started_at, self.checked_out_at) {
                (Some(start), Some(end)) => end - start,
                _ => Duration::zero(),
            },
        }
    }
}
