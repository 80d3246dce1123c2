//! mkpark planning library
//!
//! Derives the shell `mv` commands that park the emulator tree's
//! `Android.mk` build files under a name the build system ignores
//! (`Prasdroid.mk`), and restore them. The library is a pure pipeline: a
//! fixed [`Manifest`] and a [`TokenPair`] go in, an ordered [`RenamePlan`]
//! comes out, and rendering writes one `mv` line per step. Nothing here
//! touches the filesystem; executing the commands belongs to whatever
//! shell the output is handed to.
//!
//! # Example
//!
//! ```rust
//! use mkpark_plan::{Manifest, RenamePlan, TokenPair};
//!
//! let plan = RenamePlan::build(&Manifest::emulator(), &TokenPair::park());
//! assert_eq!(plan.len(), 16);
//!
//! let mut out = Vec::new();
//! mkpark_plan::write_plan(&plan, &mut out).unwrap();
//! assert!(out.starts_with(b"mv ./Android.mk ./Prasdroid.mk\n"));
//! ```

#![warn(missing_docs)]

pub mod entry;
pub mod manifest;
pub mod plan;
pub mod render;
pub mod token;

// Re-exports
pub use entry::PathEntry;
pub use manifest::Manifest;
pub use plan::{RenamePlan, RenameStep};
pub use render::{render_step, write_plan, MOVE_COMMAND};
pub use token::{Direction, TokenError, TokenPair, ACTIVE_MAKEFILE, PARKED_MAKEFILE};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for plan building and emission
    pub use crate::{
        Direction, Manifest, PathEntry, RenamePlan, RenameStep, TokenPair,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
