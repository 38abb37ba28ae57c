//! Pure formatting functions for UI output.
//!
//! Display functions print styled lines; the `format_*`/`*_question`
//! functions only build strings so they can be tested.

use console::style;

use crate::domain::Version;
use crate::engine::BumpPlan;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// The confirmation question for a planned bump.
///
/// e.g. `bump the patch version (v1.2.3 -> v1.2.4)?`
pub fn bump_question(plan: &BumpPlan) -> String {
    format!(
        "bump the {} version ({} -> {})?",
        plan.bump, plan.current, plan.next
    )
}

/// Field-by-field breakdown of a version, followed by its canonical form.
pub fn format_breakdown(version: &Version) -> String {
    format!(
        "  prefix : {}\n  major  : {}\n  minor  : {}\n  patch  : {}\n  label  : {}\n  --------\n  {}",
        version.prefix, version.major, version.minor, version.patch, version.label, version
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionBump;

    #[test]
    fn test_bump_question() {
        let plan = BumpPlan {
            bump: VersionBump::Patch,
            current: Version::new(1, 2, 3, "").with_prefix("v"),
            next: Version::new(1, 2, 4, "").with_prefix("v"),
        };
        assert_eq!(bump_question(&plan), "bump the patch version (v1.2.3 -> v1.2.4)?");
    }

    #[test]
    fn test_format_breakdown() {
        let text = format_breakdown(&Version::new(1, 4, 0, "rc.2").with_prefix("v"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  prefix : v");
        assert_eq!(lines[1], "  major  : 1");
        assert_eq!(lines[4], "  label  : rc.2");
        assert_eq!(lines[6], "  v1.4.0-rc.2");
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_warning("test warning");
        display_success("test success");
        display_status("test status");
    }
}
