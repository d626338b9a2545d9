use crossterm::event::KeyEvent;
use newscheck_core::Verdict;

/// Everything that can reach the app loop.
#[derive(Debug)]
pub(crate) enum AppEvent {
    /// Key press forwarded from the terminal input stream.
    Key(KeyEvent),

    /// Bracketed paste forwarded from the terminal input stream.
    Paste(String),

    /// Redraw without a state change (e.g. terminal resize).
    RequestRedraw,

    /// A simulated check finished. `request` identifies which trigger the
    /// verdict belongs to; stale ids are discarded by the session.
    DetectionComplete { request: u64, verdict: Verdict },

    /// Shut the app down.
    ExitRequest,
}
