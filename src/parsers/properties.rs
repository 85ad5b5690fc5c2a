//! `.properties` file parsing.
//!
//! Implements the key=value-per-line format: comment lines starting with
//! `#` or `!`, backslash line continuations, `=` or `:` separators, and the
//! usual escape sequences. Later duplicate keys overwrite earlier values.
//!
//! Parse and read errors are fatal for the whole scan: a silently skipped
//! file would narrow the key universe and corrupt the coverage report.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow, bail};

use crate::core::PropertiesFile;

/// Parse a `.properties` file from disk.
///
/// The file handle is scoped to the read; nothing outlives the parse.
pub fn parse_properties_file(path: &Path) -> Result<PropertiesFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read properties file: {}", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    parse_properties(&content, path.display().to_string(), name)
        .with_context(|| format!("Failed to parse properties file: {}", path.display()))
}

/// Parse `.properties` content into a [`PropertiesFile`].
pub fn parse_properties(content: &str, path: String, name: String) -> Result<PropertiesFile> {
    let mut file = PropertiesFile::new(path, name);

    for (line_no, logical) in logical_lines(content) {
        if let Some((key, value)) = parse_line(&logical, line_no)? {
            file.insert(key, value);
        }
    }

    Ok(file)
}

/// Join continuation lines into logical lines, tagged with the physical
/// line number the logical line starts on.
///
/// A line ending in an odd number of backslashes continues onto the next
/// line; the continuation's leading whitespace is stripped.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut lines = content.lines().enumerate();

    while let Some((idx, line)) = lines.next() {
        let start = idx + 1;
        let mut logical = line.to_string();
        while ends_in_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }
        result.push((start, logical));
    }

    result
}

fn ends_in_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Parse one logical line. Returns `None` for blank and comment lines.
fn parse_line(line: &str, line_no: usize) -> Result<Option<(String, String)>> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
        return Ok(None);
    }

    // A line with no separator defines the whole line as a key with an
    // empty value.
    let (raw_key, raw_value) = match find_separator(trimmed) {
        Some(pos) => (&trimmed[..pos], &trimmed[pos + 1..]),
        None => (trimmed, ""),
    };

    let key = unescape(raw_key.trim(), line_no)?;
    if key.is_empty() {
        bail!("empty property key on line {}", line_no);
    }
    let value = unescape(raw_value.trim(), line_no)?;

    Ok(Some((key, value)))
}

/// Byte position of the first unescaped `=` or `:`.
fn find_separator(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Decode `\n` `\t` `\r` `\\` `\uXXXX`; a backslash before any other
/// character drops the backslash.
fn unescape(text: &str, line_no: usize) -> Result<String> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('u') => {
                let code: String = chars.by_ref().take(4).collect();
                if code.len() < 4 {
                    bail!("truncated \\u escape on line {}", line_no);
                }
                let value = u32::from_str_radix(&code, 16)
                    .map_err(|_| anyhow!("invalid \\u escape \"\\u{}\" on line {}", code, line_no))?;
                let ch = char::from_u32(value).ok_or_else(|| {
                    anyhow!("invalid \\u escape \"\\u{}\" on line {}", code, line_no)
                })?;
                result.push(ch);
            }
            Some(other) => result.push(other),
            None => {}
        }
    }

    Ok(result)
}

// ============================================================
// Tests
// ============================================================
