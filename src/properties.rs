use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::PropertiesError;

/// Key/value table parsed from a properties file.
///
/// Keys are unique; iteration follows insertion order so repeated runs over
/// the same file print identically.
#[derive(Debug, Default)]
pub struct PropertyTable {
    keys: Vec<String>,
    values: HashMap<String, String>,
}

impl PropertyTable {
    pub fn new() -> Self {
        PropertyTable {
            keys: Vec::new(),
            values: HashMap::new(),
        }
    }

    /// Reads `path` as UTF-8 and parses it. Missing file, permission errors
    /// and invalid UTF-8 all surface as the I/O variant.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PropertiesError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses properties text: `key=value` or `key:value` per logical line,
    /// `#`/`!` comments, blank lines skipped, backslash continuation and
    /// escape sequences.
    pub fn parse(src: &str) -> Result<Self, PropertiesError> {
        let mut table = PropertyTable::new();
        let mut logical = String::new();
        let mut logical_start = 0;
        let mut continuing = false;

        for (idx, line) in src.lines().enumerate() {
            let line_no = idx + 1;

            if continuing {
                // Continuation lines lose their leading whitespace and are
                // never treated as comments.
                let cont = line.trim_start();
                if ends_with_odd_backslashes(cont) {
                    logical.push_str(&cont[..cont.len() - 1]);
                } else {
                    logical.push_str(cont);
                    continuing = false;
                    table.insert_logical_line(&logical, logical_start)?;
                    logical.clear();
                }
                continue;
            }

            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            if ends_with_odd_backslashes(trimmed) {
                continuing = true;
                logical_start = line_no;
                logical.push_str(&trimmed[..trimmed.len() - 1]);
            } else {
                table.insert_logical_line(trimmed, line_no)?;
            }
        }

        // EOF inside a continuation: the logical line ends as accumulated.
        if continuing {
            table.insert_logical_line(&logical, logical_start)?;
        }

        Ok(table)
    }

    fn insert_logical_line(&mut self, line: &str, line_no: usize) -> Result<(), PropertiesError> {
        let sep = match find_unescaped_separator(line) {
            Some(pos) => pos,
            None => {
                debug!("no key separator on line {}, skipped", line_no);
                return Ok(());
            }
        };
        let key = decode_escapes(line[..sep].trim(), line_no)?;
        let value = decode_escapes(line[sep + 1..].trim_start(), line_no)?;
        self.insert(key, value);
        Ok(())
    }

    /// Inserts a pair. A repeated key overwrites the value but keeps the
    /// key's original position.
    pub fn insert(&mut self, key: String, value: String) {
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.keys
            .iter()
            .map(|key| (key.as_str(), self.values[key].as_str()))
    }
}

// An odd count means the final backslash is a continuation marker; an even
// count is a run of escaped backslashes.
fn ends_with_odd_backslashes(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn find_unescaped_separator(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (pos, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => return Some(pos),
            _ => {}
        }
    }
    None
}

fn decode_escapes(raw: &str, line_no: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let mut code = 0;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|hex| hex.to_digit(16))
                        .ok_or(PropertiesError::InvalidEscape { line: line_no })?;
                    code = code * 16 + digit;
                }
                let decoded =
                    char::from_u32(code).ok_or(PropertiesError::InvalidEscape { line: line_no })?;
                out.push(decoded);
            }
            // Any other escaped character stands for itself.
            Some(other) => out.push(other),
            // Dangling backslash at the end of the logical line.
            None => {}
        }
    }
    Ok(out)
}
