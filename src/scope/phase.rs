/// ## Progress of one breakable scope
///
/// A scope starts `Entered` and ends in exactly one of the other three.
/// Only `ExitedViaBreak` runs the fallback.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Entered,
    ExitedViaBreak,
    ExitedViaContinue,
    Completed,
}

impl Phase {
    pub fn runs_fallback(self) -> bool {
        self == Phase::ExitedViaBreak
    }

    pub fn is_exited(self) -> bool {
        match self {
            Phase::ExitedViaBreak | Phase::ExitedViaContinue => true,
            Phase::Entered | Phase::Completed => false,
        }
    }
}

impl Default for Phase {
    fn default() -> Phase {
        Phase::Entered
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Phase::Entered => "entered",
            Phase::ExitedViaBreak => "break",
            Phase::ExitedViaContinue => "continue",
            Phase::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}
