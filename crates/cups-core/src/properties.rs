//! Reading `.properties`-style association files and resolving `${...}`
//! references in their values.

use std::collections::BTreeMap;
use std::path::Path;

use cups_util::errors::CupsError;

/// Parse properties text into `(key, value)` pairs in file order.
///
/// Supports `#`/`!` comments, `=`, `:` or whitespace separators, backslash
/// line continuations and backslash escapes. Duplicate keys are all kept; the
/// later one wins once the pairs are merged.
pub fn parse_properties(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }
        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }
        pairs.push(split_entry(&logical));
    }
    pairs
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (String, String) {
    let mut key_end = line.len();
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }
    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start();
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start();
    }
    (unescape(key), unescape(rest))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let Some(c) = after.chars().next() else {
            return out;
        };
        if c == 'u' {
            match decode_unicode(after) {
                Some((decoded, used)) => {
                    out.push(decoded);
                    rest = &after[used..];
                }
                None => {
                    out.push_str("\\u");
                    rest = &after[1..];
                }
            }
            continue;
        }
        out.push(match c {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{c}',
            other => other,
        });
        rest = &after[c.len_utf8()..];
    }
    out.push_str(rest);
    out
}

/// Decode `uXXXX` at the start of `s`, pairing a high surrogate with a
/// following `\uXXXX` low surrogate. Returns the char and the bytes used.
fn decode_unicode(s: &str) -> Option<(char, usize)> {
    let unit = hex_unit(s)?;
    if !(0xD800..0xDC00).contains(&unit) {
        return char::from_u32(unit).map(|c| (c, 5));
    }
    let low = s[5..].strip_prefix('\\').and_then(hex_unit)?;
    if !(0xDC00..0xE000).contains(&low) {
        return None;
    }
    let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(code).map(|c| (c, 11))
}

/// The value of `uXXXX` (exactly four hex digits) at the start of `s`.
fn hex_unit(s: &str) -> Option<u32> {
    let digits = s.strip_prefix('u')?.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Decode properties file bytes: UTF-8 when valid, otherwise ISO-8859-1.
pub fn decode_properties(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("properties file is not UTF-8, decoding as ISO-8859-1");
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Read and parse a properties file.
pub fn read_properties(path: &Path) -> std::io::Result<Vec<(String, String)>> {
    let bytes = cups_util::fs::read_bytes(path)?;
    Ok(parse_properties(&decode_properties(bytes)))
}

/// Loads an env file of `KEY=value` lines.
///
/// The file uses the same syntax as association sources. Values are
/// available via `${env:VAR}` interpolation in association values. A missing
/// file yields an empty map.
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    if !path.is_file() {
        return Ok(BTreeMap::new());
    }
    let pairs = read_properties(path).map_err(CupsError::Io)?;
    Ok(pairs.into_iter().collect())
}

/// Interpolate `${name}` and `${env:VAR}` references in a string.
///
/// `${name}` expands to the value of property `name`, itself interpolated.
/// `${env:VAR}` looks in `env_overrides` first, then the process environment,
/// and expands to an empty string when neither has it. Unknown names,
/// unterminated references and reference cycles are left as written.
pub fn interpolate(
    input: &str,
    properties: &BTreeMap<String, String>,
    env_overrides: &BTreeMap<String, String>,
) -> String {
    let mut visiting = Vec::new();
    expand(input, properties, env_overrides, &mut visiting)
}

/// Interpolate every value of `pairs` against the pairs themselves.
///
/// Order and duplicates are preserved. References to a duplicated key see
/// its last value.
pub fn resolve_values(
    pairs: Vec<(String, String)>,
    env_overrides: &BTreeMap<String, String>,
) -> Vec<(String, String)> {
    let properties: BTreeMap<String, String> = pairs.iter().cloned().collect();
    pairs
        .into_iter()
        .map(|(key, raw)| {
            let mut visiting = vec![key.clone()];
            let value = expand(&raw, &properties, env_overrides, &mut visiting);
            (key, value)
        })
        .collect()
}

fn expand(
    input: &str,
    properties: &BTreeMap<String, String>,
    env_overrides: &BTreeMap<String, String>,
    visiting: &mut Vec<String>,
) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match lookup(name, properties, env_overrides, visiting) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

fn lookup(
    name: &str,
    properties: &BTreeMap<String, String>,
    env_overrides: &BTreeMap<String, String>,
    visiting: &mut Vec<String>,
) -> Option<String> {
    if let Some(var) = name.strip_prefix("env:") {
        let value = env_overrides
            .get(var)
            .cloned()
            .or_else(|| std::env::var(var).ok())
            .unwrap_or_default();
        return Some(value);
    }
    if visiting.iter().any(|v| v == name) {
        tracing::debug!(name, "cyclic property reference left unexpanded");
        return None;
    }
    let raw = properties.get(name)?;
    visiting.push(name.to_string());
    let value = expand(raw, properties, env_overrides, visiting);
    visiting.pop();
    Some(value)
}
