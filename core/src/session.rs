//! Detection session state machine.
//!
//! Owns the interactive state behind the UI: the draft text, the current
//! phase (idle / checking / complete), and disclaimer visibility. The
//! simulated check is asynchronous from the session's point of view:
//! `start` hands the caller a [`Detection`] snapshot to run, and `resolve`
//! applies the verdict only if that request is still the in-flight one.
//! A result arriving after `clear` (or for any superseded request) is
//! silently discarded — that id check is the sole ordering discipline.

use std::time::Duration;

use rand::Rng;

use crate::classifier::Verdict;

/// Lower bound of the simulated check latency.
pub const MIN_LATENCY: Duration = Duration::from_millis(500);
/// Upper bound of the simulated check latency.
pub const MAX_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Checking { request: u64 },
    Complete { verdict: Verdict },
}

/// A snapshot handed out by [`DetectSession::start`].
///
/// `text` is captured at trigger time, so edits made while the check is in
/// flight do not change what gets classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub request: u64,
    pub text: String,
    pub latency: Duration,
}

/// Interactive state machine for one mounted detector UI.
#[derive(Debug)]
pub struct DetectSession {
    input: String,
    phase: Phase,
    disclaimer_visible: bool,
    next_request: u64,
}

impl DetectSession {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            phase: Phase::Idle,
            disclaimer_visible: true,
            next_request: 0,
        }
    }

    /// Replace the draft text. Allowed in every phase — while a check is
    /// in flight only the trigger is disabled, not editing.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn disclaimer_visible(&self) -> bool {
        self.disclaimer_visible
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Checking { .. })
    }

    /// The last verdict, absent while checking and after `clear`.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Complete { verdict } => Some(verdict),
            _ => None,
        }
    }

    /// Whether a detection may be triggered right now.
    pub fn can_start(&self) -> bool {
        !self.is_busy() && !self.input.trim().is_empty()
    }

    /// Trigger a detection.
    ///
    /// Returns `None` when the trimmed input is empty or a check is already
    /// in flight. Otherwise hides the disclaimer, enters the checking phase
    /// under a fresh request id, and returns the work for the caller to
    /// schedule after `latency`.
    pub fn start(&mut self) -> Option<Detection> {
        if !self.can_start() {
            return None;
        }
        let request = self.next_request;
        self.next_request += 1;
        self.disclaimer_visible = false;
        self.phase = Phase::Checking { request };
        Some(Detection {
            request,
            text: self.input.clone(),
            latency: simulated_latency(),
        })
    }

    /// Apply a finished check.
    ///
    /// The verdict lands only if the session is still checking that exact
    /// request; anything else (cleared session, superseded request) is a
    /// stale result and is dropped. Returns whether the verdict applied.
    pub fn resolve(&mut self, request: u64, verdict: Verdict) -> bool {
        match self.phase {
            Phase::Checking { request: in_flight } if in_flight == request => {
                self.phase = Phase::Complete { verdict };
                true
            }
            _ => {
                tracing::debug!(request, "discarding stale detection result");
                false
            }
        }
    }

    /// Reset to the initial state: empty input, no verdict, not busy,
    /// disclaimer visible. Any in-flight check becomes stale because its
    /// request id is abandoned here.
    pub fn clear(&mut self) {
        self.input.clear();
        self.phase = Phase::Idle;
        self.disclaimer_visible = true;
    }
}

impl Default for DetectSession {
    fn default() -> Self {
        Self::new()
    }
}

fn simulated_latency() -> Duration {
    let min = MIN_LATENCY.as_millis() as u64;
    let max = MAX_LATENCY.as_millis() as u64;
    Duration::from_millis(rand::rng().random_range(min..=max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_state() {
        let session = DetectSession::new();
        assert_eq!("", session.input());
        assert!(session.disclaimer_visible());
        assert!(!session.is_busy());
        assert_eq!(None, session.verdict());
        assert!(!session.can_start());
    }

    #[test]
    fn start_requires_non_blank_input() {
        let mut session = DetectSession::new();
        assert_eq!(None, session.start());
        session.set_input("   ");
        assert_eq!(None, session.start());
        assert!(session.disclaimer_visible());
    }

    #[test]
    fn start_enters_checking_and_hides_disclaimer() {
        let mut session = DetectSession::new();
        session.set_input("aliens spotted");
        let detection = session.start().expect("trigger should fire");

        assert_eq!("aliens spotted", detection.text);
        assert!(session.is_busy());
        assert!(!session.disclaimer_visible());
        assert_eq!(None, session.verdict());
    }

    #[test]
    fn start_is_refused_while_busy() {
        let mut session = DetectSession::new();
        session.set_input("some headline");
        session.start().expect("first trigger");
        assert_eq!(None, session.start());
    }

    #[test]
    fn latency_stays_in_range() {
        let mut session = DetectSession::new();
        for i in 0..50 {
            session.set_input(format!("headline {i}"));
            let detection = session.start().expect("trigger");
            assert!(detection.latency >= MIN_LATENCY);
            assert!(detection.latency <= MAX_LATENCY);
            session.clear();
        }
    }

    #[test]
    fn matching_resolve_lands() {
        let mut session = DetectSession::new();
        session.set_input("aliens spotted");
        let detection = session.start().expect("trigger");

        assert!(session.resolve(detection.request, Verdict::FakeNews));
        assert!(!session.is_busy());
        assert_eq!(Some(Verdict::FakeNews), session.verdict());
    }

    #[test]
    fn editing_while_busy_does_not_change_captured_text() {
        let mut session = DetectSession::new();
        session.set_input("first draft");
        let detection = session.start().expect("trigger");

        session.set_input("second draft");
        assert_eq!("first draft", detection.text);
        assert_eq!("second draft", session.input());
        assert!(session.is_busy());
    }

    #[test]
    fn clear_makes_inflight_result_stale() {
        let mut session = DetectSession::new();
        session.set_input("aliens spotted");
        let detection = session.start().expect("trigger");

        session.clear();
        assert!(!session.resolve(detection.request, Verdict::FakeNews));
        assert!(!session.is_busy());
        assert_eq!(None, session.verdict());
        assert!(session.disclaimer_visible());
        assert_eq!("", session.input());
    }

    #[test]
    fn superseded_request_is_discarded() {
        let mut session = DetectSession::new();
        session.set_input("first headline");
        let first = session.start().expect("first trigger");

        session.clear();
        session.set_input("second headline");
        let second = session.start().expect("second trigger");
        assert_ne!(first.request, second.request);

        // The first check finishes late; only the second may land.
        assert!(!session.resolve(first.request, Verdict::FakeNews));
        assert!(session.is_busy());
        assert!(session.resolve(second.request, Verdict::Undetermined));
        assert_eq!(Some(Verdict::Undetermined), session.verdict());
    }

    #[test]
    fn resolve_on_idle_session_is_ignored() {
        let mut session = DetectSession::new();
        assert!(!session.resolve(0, Verdict::RealNews));
        assert_eq!(None, session.verdict());
    }

    #[test]
    fn clear_from_complete_resets_everything() {
        let mut session = DetectSession::new();
        session.set_input("aliens spotted");
        let detection = session.start().expect("trigger");
        session.resolve(detection.request, Verdict::FakeNews);

        session.clear();
        assert_eq!("", session.input());
        assert_eq!(None, session.verdict());
        assert!(session.disclaimer_visible());
        assert!(!session.is_busy());
    }
}
