/*!
# Rust Scope Module

This Rust module provides the breakable scope: the `breakable_scope!`
macro, the phases a scope can end in, and a closure form for bodies
that cannot use `break` and `continue` directly.

*/

#[macro_use]
mod macros;
mod exit;
mod marker;
mod phase;

pub use exit::attempt;
pub use exit::ensure;
pub use exit::run;
pub use exit::skip_if;
pub use exit::Exit;
pub use exit::Result;
pub use marker::Marker;
pub use phase::Phase;

#[cfg(test)]
mod tests;
