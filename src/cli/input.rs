//! Console prompt helpers
//!
//! Malformed input is the console layer's problem: these helpers re-prompt
//! until a parseable value arrives, so services only ever see well-shaped
//! arguments. EOF on stdin surfaces as an I/O error and unwinds the menu.

use std::io::{self, BufRead};

use chrono::NaiveDate;

use crate::cli::output;
use crate::domain::EntityId;

/// Read one line, trimmed of the trailing newline.
pub fn read_line(prompt: &str) -> io::Result<String> {
    output::prompt(prompt);
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Read free text; blank is allowed (the caller decides what it means).
pub fn read_text(prompt: &str) -> io::Result<String> {
    read_line(prompt)
}

/// Read text, re-prompting until it is non-blank.
pub fn read_required_text(prompt: &str) -> io::Result<String> {
    loop {
        let value = read_line(prompt)?;
        if !value.trim().is_empty() {
            return Ok(value);
        }
        output::info("Value must not be blank. Try again.");
    }
}

/// Read an integer, re-prompting on parse failure.
pub fn read_i32(prompt: &str) -> io::Result<i32> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => output::info("Invalid number. Try again."),
        }
    }
}

/// Read a record identifier, re-prompting on parse failure.
pub fn read_id(prompt: &str) -> io::Result<EntityId> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<EntityId>() {
            Ok(value) => return Ok(value),
            Err(_) => output::info("Invalid number. Try again."),
        }
    }
}

/// Read a calendar date in the given `chrono` format, re-prompting on
/// parse failure.
pub fn read_date(prompt: &str, format: &str) -> io::Result<NaiveDate> {
    loop {
        let line = read_line(prompt)?;
        match NaiveDate::parse_from_str(line.trim(), format) {
            Ok(date) => return Ok(date),
            Err(_) => output::info("Invalid date. Try again."),
        }
    }
}

/// Ask a yes/no question; anything but `y`/`Y` counts as no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let answer = read_line(prompt)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
