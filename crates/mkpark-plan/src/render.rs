//! Command rendering and emission
//!
//! Formats plan steps as shell `mv` lines and writes them to any
//! [`io::Write`]. Formatting is separate from emission so the computation
//! is testable without capturing stdout.

use std::io::{self, Write};

use crate::plan::{RenamePlan, RenameStep};

/// Shell command emitted for every step
pub const MOVE_COMMAND: &str = "mv";

/// Format one step as a shell move line
///
/// Paths are rendered verbatim, single-space separated, no trailing
/// whitespace: `mv <source> <destination>`. The built-in list contains no
/// shell metacharacters, so no quoting is applied.
#[must_use]
pub fn render_step(step: &RenameStep) -> String {
    format!(
        "{} {} {}",
        MOVE_COMMAND,
        step.source(),
        step.destination()
    )
}

/// Write a plan as newline-terminated command lines
///
/// One line per step, in plan order; no header, footer, or summary line.
///
/// # Errors
/// Returns the underlying writer error. Planning itself cannot fail; this
/// seam is the crate's only fallible surface.
pub fn write_plan<W: Write>(plan: &RenamePlan, writer: &mut W) -> io::Result<()> {
    for step in plan {
        writeln!(writer, "{}", render_step(step))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::PathEntry;
    use crate::manifest::Manifest;
    use crate::token::TokenPair;
    use pretty_assertions::assert_eq;

    fn park_plan(paths: &[&str]) -> RenamePlan {
        let manifest: Manifest = paths.iter().copied().map(PathEntry::new).collect();
        RenamePlan::build(&manifest, &TokenPair::park())
    }

    #[test]
    fn render_formats_a_move_line() {
        let plan = park_plan(&["./Android.mk"]);
        assert_eq!(
            render_step(&plan.steps()[0]),
            "mv ./Android.mk ./Prasdroid.mk"
        );
    }

    #[test]
    fn render_keeps_noop_steps() {
        let plan = park_plan(&["./notes.txt"]);
        assert_eq!(render_step(&plan.steps()[0]), "mv ./notes.txt ./notes.txt");
    }

    #[test]
    fn write_plan_emits_one_line_per_step() {
        let plan = park_plan(&["./Android.mk", "./distrib/jpeg-6b/Android.mk"]);
        let mut out = Vec::new();
        write_plan(&plan, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "mv ./Android.mk ./Prasdroid.mk\n\
             mv ./distrib/jpeg-6b/Android.mk ./distrib/jpeg-6b/Prasdroid.mk\n"
        );
    }

    #[test]
    fn write_plan_of_empty_plan_writes_nothing() {
        let plan = park_plan(&[]);
        let mut out = Vec::new();
        write_plan(&plan, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
