use super::{Marker, Phase};

/// ## Early exit from a closure body
///
/// `break` and `continue` cannot leave a closure, so a body written as a
/// closure returns one of these through `Err` instead.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exit {
    Break,
    Continue,
}

pub type Result = std::result::Result<(), Exit>;

impl std::fmt::Display for Exit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Exit::Break => write!(f, "break"),
            Exit::Continue => write!(f, "continue"),
        }
    }
}

impl std::error::Error for Exit {}

/// Breaks when `condition` is false.
pub fn ensure(condition: bool) -> Result {
    if condition {
        Ok(())
    } else {
        Err(Exit::Break)
    }
}

/// Continues when `condition` is true.
pub fn skip_if(condition: bool) -> Result {
    if condition {
        Err(Exit::Continue)
    } else {
        Ok(())
    }
}

/// Closure form of `breakable_scope!`. Runs `body`, then `fallback` only
/// if `body` returned `Err(Exit::Break)`. Returns how the body ended.
#[track_caller]
pub fn run<B, F>(body: B, fallback: F) -> Phase
where
    B: FnOnce() -> Result,
    F: FnOnce(),
{
    let mut marker = Marker::new();
    match body() {
        Ok(()) => marker.complete(),
        Err(Exit::Continue) => marker.skip(),
        Err(Exit::Break) => {}
    }
    let phase = marker.settle();
    if phase.runs_fallback() {
        fallback();
    }
    phase
}

/// `run` without a fallback.
#[track_caller]
pub fn attempt<B>(body: B) -> Phase
where
    B: FnOnce() -> Result,
{
    run(body, || {})
}
