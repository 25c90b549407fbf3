//! Observable events
//!
//! Every log line names one of these. Names are fixed, upper snake case.

use std::fmt;

/// Observable events in marquee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Listener stopped
    ShutdownComplete,
    /// Startup or serving failed
    ServerFailed,

    // Catalogue mutations
    /// A movie was added
    MovieCreated,
    /// A movie was replaced in place
    MovieUpdated,
    /// A movie was removed
    MovieDeleted,

    /// A catalogue operation returned a typed failure
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "MARQUEE_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "MARQUEE_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServerFailed => "SERVER_FAILED",

            Event::MovieCreated => "MOVIE_CREATED",
            Event::MovieUpdated => "MOVIE_UPDATED",
            Event::MovieDeleted => "MOVIE_DELETED",

            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
