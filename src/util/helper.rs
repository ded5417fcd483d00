// src/util/helper.rs
use std::io::{self, BufRead, Write};

/// Ensure a vector of strings contains only integers
pub fn ensure_int_vector(vec: &[String]) -> Option<Vec<i64>> {
    vec.iter()
        .map(|s| s.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map(|mut v| {
            v.sort();
            v.dedup();
            v
        })
        .ok()
}

/// Interactive confirmation prompt
pub fn confirm(prompt: &str) -> bool {
    confirm_with(prompt, &mut io::stdin().lock(), &mut io::stdout())
}

/// Confirmation prompt over arbitrary streams; anything but y/yes declines
pub fn confirm_with<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> bool {
    if write!(output, "{} (y/N): ", prompt).and_then(|_| output.flush()).is_err() {
        return false;
    }

    let mut user_input = String::new();
    if input.read_line(&mut user_input).is_err() {
        return false;
    }

    matches!(user_input.trim().to_lowercase().as_str(), "y" | "yes")
}
