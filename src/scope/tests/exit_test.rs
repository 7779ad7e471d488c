use crate::scope::{attempt, ensure, run, skip_if, Exit, Phase};

#[test]
fn test_run_completed() {
    let mut fallback = false;
    let phase = run(|| Ok(()), || fallback = true);
    assert_eq!(phase, Phase::Completed);
    assert!(!fallback);
}

#[test]
fn test_run_break() {
    let mut fallback = false;
    let phase = run(|| Err(Exit::Break), || fallback = true);
    assert_eq!(phase, Phase::ExitedViaBreak);
    assert!(fallback);
}

#[test]
fn test_run_continue() {
    let mut fallback = false;
    let phase = run(|| Err(Exit::Continue), || fallback = true);
    assert_eq!(phase, Phase::ExitedViaContinue);
    assert!(!fallback);
}

#[test]
fn test_attempt() {
    assert_eq!(attempt(|| ensure(true)), Phase::Completed);
    assert_eq!(attempt(|| ensure(false)), Phase::ExitedViaBreak);
    assert_eq!(attempt(|| skip_if(true)), Phase::ExitedViaContinue);
    assert_eq!(attempt(|| skip_if(false)), Phase::Completed);
}

#[test]
fn test_exit_display() {
    assert_eq!(Exit::Break.to_string(), "break");
    assert_eq!(Exit::Continue.to_string(), "continue");
}

#[test]
fn test_exit_is_an_error() {
    let err: Box<dyn std::error::Error> = Box::new(Exit::Break);
    assert_eq!(err.to_string(), "break");
}

#[test]
fn test_exit_and_phase_display_agree() {
    assert_eq!(Exit::Break.to_string(), run(|| Err(Exit::Break), || {}).to_string());
    assert_eq!(Exit::Continue.to_string(), attempt(|| Err(Exit::Continue)).to_string());
}
