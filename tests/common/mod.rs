#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

/// Records the order statements ran in.
#[derive(Debug, Default, Clone)]
pub struct Trail {
    steps: Rc<RefCell<Vec<String>>>,
}

impl Trail {
    pub fn new() -> Trail {
        Trail::default()
    }
    pub fn step(&self, name: &str) {
        self.steps.borrow_mut().push(name.to_string());
    }
    pub fn guard(&self, name: &str) -> Guard {
        Guard {
            name: name.to_string(),
            trail: self.clone(),
        }
    }
    pub fn steps(&self) -> String {
        self.steps.borrow().join(" ")
    }
}

/// Adds `drop <name>` to its trail when dropped.
pub struct Guard {
    name: String,
    trail: Trail,
}

impl Drop for Guard {
    fn drop(&mut self) {
        self.trail.step(&format!("drop {}", self.name));
    }
}
