//! # Breakable Scope
//!
//! A block you can leave early. `break` leaves it and runs an `else`
//! block, `continue` leaves it quietly, and reaching the end skips the
//! `else` block.
//!
//! ```
//! use breakable_scope::breakable_scope;
//!
//! let mut value = 0;
//! breakable_scope! {
//!     {
//!         value = 1;
//!         continue;
//!         value = 2;
//!     } else {
//!         value = 3;
//!     }
//! }
//! assert_eq!(value, 1);
//! ```
//!
//! Start with the [introduction](_Introduction/index.html).
//! Bodies written as closures use [`run`] instead of the macro.
//!
//! Enable the `tracing` feature to get a `TRACE` event, target
//! `breakable_scope`, each time a scope decides whether to run its
//! fallback.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod scope;

pub use scope::{attempt, ensure, run, skip_if, Exit, Phase};
