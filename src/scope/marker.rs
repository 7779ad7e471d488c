use super::Phase;
use std::panic::Location;

/// ## Scope-progress marker
///
/// Each expansion of `breakable_scope!` owns one of these. The body runs
/// inside a `loop` whose top calls `enter`; a `continue` in the body lands
/// back on that call, a `break` leaves the loop with the phase still
/// `Entered`, and falling off the end calls `complete`. `settle` then
/// decides the outcome.

#[doc(hidden)]
pub struct Marker {
    phase: Phase,
    entered: bool,
    location: &'static Location<'static>,
}

impl std::fmt::Debug for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Marker {{ {} at {} }}", self.phase, self.location)
    }
}

impl Marker {
    #[track_caller]
    pub fn new() -> Marker {
        Marker {
            phase: Phase::Entered,
            entered: false,
            location: Location::caller(),
        }
    }

    pub fn enter(&mut self) -> bool {
        if self.entered {
            self.skip();
            false
        } else {
            self.entered = true;
            true
        }
    }

    /// Only an `Entered` marker moves; the first outcome recorded wins.
    pub fn complete(&mut self) {
        if self.phase == Phase::Entered {
            self.phase = Phase::Completed;
        }
    }

    /// Same rule as `complete`.
    pub fn skip(&mut self) {
        if self.phase == Phase::Entered {
            self.phase = Phase::ExitedViaContinue;
        }
    }

    pub fn settle(&mut self) -> Phase {
        if self.phase == Phase::Entered {
            self.phase = Phase::ExitedViaBreak;
        }
        self.trace();
        self.phase
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    #[cfg(feature = "tracing")]
    fn trace(&self) {
        tracing::trace!(
            target: "breakable_scope",
            phase = %self.phase,
            fallback = self.phase.runs_fallback(),
            file = self.location.file(),
            line = self.location.line(),
            column = self.location.column(),
            "scope settled"
        );
    }

    #[cfg(not(feature = "tracing"))]
    fn trace(&self) {}
}

impl Default for Marker {
    #[track_caller]
    fn default() -> Marker {
        Marker::new()
    }
}
