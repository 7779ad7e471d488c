use crate::scope::{Marker, Phase};

mod exit_test;

fn settled(steps: &[&str]) -> (Phase, bool) {
    let mut marker = Marker::new();
    for step in steps {
        match *step {
            "enter" => {
                if !marker.enter() {
                    break;
                }
            }
            "complete" => marker.complete(),
            "skip" => marker.skip(),
            _ => unreachable!("{}", step),
        }
    }
    let phase = marker.settle();
    (phase, phase.runs_fallback())
}
