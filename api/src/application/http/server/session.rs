use std::sync::{Arc, Mutex};

use serde::Serialize;
use utoipa::ToSchema;

/// Where the interactive session currently is in the analysis pipeline.
/// Anything other than `Idle` means an analysis is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Idle,
    Validating,
    Encoding,
    CallingService,
}

impl SessionPhase {
    pub fn as_str(&self) -> &str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Validating => "validating",
            SessionPhase::Encoding => "encoding",
            SessionPhase::CallingService => "calling_service",
        }
    }
}

/// Single-slot gate enforcing at most one in-flight analysis per session.
/// There is no queue: a begin attempt while busy is rejected outright.
#[derive(Clone, Default)]
pub struct SessionGate {
    phase: Arc<Mutex<SessionPhase>>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SessionPhase {
        *self.phase.lock().unwrap()
    }

    /// Transitions `Idle -> Validating`. Returns `None` while an analysis is
    /// already in flight.
    pub fn begin(&self) -> Option<SessionGuard> {
        let mut phase = self.phase.lock().unwrap();
        if *phase != SessionPhase::Idle {
            return None;
        }

        *phase = SessionPhase::Validating;
        Some(SessionGuard {
            phase: Arc::clone(&self.phase),
        })
    }
}

/// Holds the session slot for one request. Dropping the guard returns the
/// session to `Idle` on every exit path, success or failure.
pub struct SessionGuard {
    phase: Arc<Mutex<SessionPhase>>,
}

impl SessionGuard {
    pub fn advance(&self, phase: SessionPhase) {
        tracing::debug!(phase = phase.as_str(), "session phase transition");
        *self.phase.lock().unwrap() = phase;
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        *self.phase.lock().unwrap() = SessionPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_rejects_a_second_in_flight_analysis() {
        let gate = SessionGate::new();

        let guard = gate.begin().unwrap();
        assert_eq!(gate.current(), SessionPhase::Validating);
        assert!(gate.begin().is_none());

        drop(guard);
        assert_eq!(gate.current(), SessionPhase::Idle);
        assert!(gate.begin().is_some());
    }

    #[test]
    fn guard_drop_returns_to_idle_from_any_phase() {
        let gate = SessionGate::new();

        let guard = gate.begin().unwrap();
        guard.advance(SessionPhase::Encoding);
        guard.advance(SessionPhase::CallingService);
        assert_eq!(gate.current(), SessionPhase::CallingService);

        drop(guard);
        assert_eq!(gate.current(), SessionPhase::Idle);
    }
}
