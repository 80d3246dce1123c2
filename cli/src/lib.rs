//! mkpark command-line tool
//!
//! Thin shell around [`mkpark_plan`]: picks the built-in manifest and
//! token pair for the requested direction, derives the plan, and writes
//! the `mv` lines to stdout. Diagnostics go to stderr through `tracing`,
//! so stdout carries nothing but command lines and stays safe to pipe
//! into a shell.

use std::io::Write;

use mkpark_plan::{Manifest, RenamePlan, TokenPair};

pub use mkpark_plan::Direction;

/// Emit the built-in plan for one direction
///
/// Park walks the active list; restore walks the parked list. Writes one
/// `mv` line per built-in path, in list order, and nothing else.
///
/// # Errors
/// Returns the writer's error if a write fails; planning itself cannot.
pub fn emit<W: Write>(direction: Direction, writer: &mut W) -> std::io::Result<()> {
    let tokens = TokenPair::for_direction(direction);
    let manifest = match direction {
        Direction::Park => Manifest::emulator(),
        Direction::Restore => Manifest::parked(),
    };
    let plan = RenamePlan::build(&manifest, &tokens);
    tracing::info!("Emitting {} plan with {} commands", direction, plan.len());
    mkpark_plan::write_plan(&plan, writer)
}

/// Install the stderr tracing subscriber
///
/// Filter comes from `RUST_LOG`; silent by default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
