//! CLI command implementations.

mod check;
mod conjugate;
mod sources;

pub use check::{run_check, CheckArgs};
pub use conjugate::{run_conjugate, ConjugateArgs};
