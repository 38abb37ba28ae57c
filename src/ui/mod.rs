//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    bump_question, display_error, display_status, display_success, display_warning,
    format_breakdown,
};

/// Canonical answer shown in the prompt options for "yes"
const TRUE_CANONICAL: &str = "y";
/// Canonical answer shown in the prompt options for "no"
const FALSE_CANONICAL: &str = "n";

/// Answers accepted as "yes"
pub const AFFIRMATIVE_ANSWERS: &[&str] = &[TRUE_CANONICAL, "yes", "yupp", "yeah", "yea", "ok", "okay"];

/// Answers accepted as "no"
pub const NEGATIVE_ANSWERS: &[&str] = &[FALSE_CANONICAL, "no", "nope", "nah", "neh", "stop", "dont"];

/// Asks a yes/no `question` on `writer` and reads the answer from `reader`.
///
/// The default answer is shown in upper case (`[Y/n]` or `[y/N]`) and is
/// returned for an empty answer or end of input. Answers are lowercased and
/// stripped of surrounding whitespace and `.,;` before being matched against
/// [AFFIRMATIVE_ANSWERS] and [NEGATIVE_ANSWERS].
///
/// An unrecognised answer prints `retry_text` and asks again; without a retry
/// text it counts as "no".
pub fn confirm<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    default: bool,
    retry_text: Option<&str>,
) -> Result<bool> {
    let options = if default {
        format!("{}/{}", TRUE_CANONICAL.to_uppercase(), FALSE_CANONICAL)
    } else {
        format!("{}/{}", TRUE_CANONICAL, FALSE_CANONICAL.to_uppercase())
    };

    loop {
        write!(writer, "{} [{}]: ", question, options)?;
        writer.flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            return Ok(default);
        }

        let answer = input
            .trim_matches(|c: char| c.is_whitespace() || ".,;".contains(c))
            .to_lowercase();

        if answer.is_empty() {
            return Ok(default);
        }
        if AFFIRMATIVE_ANSWERS.contains(&answer.as_str()) {
            return Ok(true);
        }
        if NEGATIVE_ANSWERS.contains(&answer.as_str()) {
            return Ok(false);
        }

        match retry_text {
            Some(text) => writeln!(writer, "{}", text)?,
            None => return Ok(false),
        }
    }
}

/// [confirm] against the process's stdin/stdout
pub fn confirm_action(question: &str, default: bool) -> Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    confirm(
        &mut stdin.lock(),
        &mut stdout.lock(),
        question,
        default,
        Some("please answer yes or no"),
    )
}
