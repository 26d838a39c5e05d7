use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A character the game offers the player, extracted from model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub description: String,
    pub help: String,
}

/// Outcome of the recovery cascade.
///
/// `Recovered` always carries at least one record; an empty extraction is
/// reported as `Unrecovered` so the caller can substitute its defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryResult {
    Recovered(Vec<CharacterRecord>),
    Unrecovered,
}

type Strategy = fn(&str) -> Option<Vec<CharacterRecord>>;

// Ordered by strictness; the first strategy to produce records wins and
// no strategy runs more than once.
const STRATEGIES: &[Strategy] = &[parse_strict, parse_lenient, parse_lines];

/// Coerce raw model output into character records.
///
/// Gemini gives no schema guarantee: the text may be clean JSON, JSON-like
/// pseudocode with single quotes and trailing commas, a fenced code block,
/// or prose with embedded key/value lines. Each strategy is a pure function
/// of the input, so the whole cascade is side-effect free and the caller
/// owns all logging.
pub fn recover_characters(raw: &str) -> RecoveryResult {
    for strategy in STRATEGIES {
        if let Some(records) = strategy(raw) {
            return RecoveryResult::Recovered(records);
        }
    }
    RecoveryResult::Unrecovered
}

fn parse_strict(raw: &str) -> Option<Vec<CharacterRecord>> {
    let value: Value = serde_json::from_str(raw).ok()?;
    validate_records(&value)
}

fn parse_lenient(raw: &str) -> Option<Vec<CharacterRecord>> {
    let cleaned = strip_code_fence(raw);
    let normalized = strip_trailing_commas(&normalize_quotes(cleaned));
    let value: Value = serde_json::from_str(&normalized).ok()?;
    validate_records(&value)
}

// Accept only a non-empty array whose elements are all objects; scalars,
// mixed arrays and top-level objects fall through to the next strategy.
fn validate_records(value: &Value) -> Option<Vec<CharacterRecord>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        records.push(record_from_map(item.as_object()?));
    }
    Some(records)
}

fn record_from_map(map: &Map<String, Value>) -> CharacterRecord {
    let field = |key: &str| {
        map.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    CharacterRecord {
        name: field("name"),
        description: field("description"),
        help: field("help"),
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // The opening fence line may carry an info string such as `json`.
    match rest.find('\n') {
        Some(newline) => rest[newline + 1..].trim(),
        None => rest.trim(),
    }
}

// Rewrite single-quoted strings as double-quoted ones, escaping any double
// quotes they contain. Quote characters inside a string never toggle the
// other delimiter.
fn normalize_quotes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut delim: Option<char> = None;
    while let Some(c) = chars.next() {
        match delim {
            Some(d) => match c {
                '\\' => match chars.next() {
                    // \' is not a JSON escape; the quote stands alone.
                    Some('\'') if d == '\'' => out.push('\''),
                    Some(next) => {
                        out.push('\\');
                        out.push(next);
                    }
                    None => out.push('\\'),
                },
                '"' if d == '\'' => out.push_str("\\\""),
                c if c == d => {
                    delim = None;
                    out.push('"');
                }
                c => out.push(c),
            },
            None => match c {
                '\'' | '"' => {
                    delim = Some(c);
                    out.push('"');
                }
                c => out.push(c),
            },
        }
    }
    out
}

// Drop a comma whose next significant character closes a container.
fn strip_trailing_commas(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut in_string = false;
    let mut escaped = false;
    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[i + 1..].iter().copied().find(|ch| !ch.is_whitespace());
                if !matches!(next, Some('}') | Some(']')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

// Last resort: scan line by line. `{` opens a record accumulator, `}`
// closes it, and `key: value` lines in between set fields. Lines outside
// an open record are discarded, as are single-line records and nested
// braces; malformed output loses data rather than failing the request.
fn parse_lines(raw: &str) -> Option<Vec<CharacterRecord>> {
    let mut records = Vec::new();
    let mut current: Option<Map<String, Value>> = None;
    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('{') {
            current = Some(Map::new());
        } else if trimmed.ends_with('}') {
            if let Some(map) = current.take() {
                if !map.is_empty() {
                    records.push(record_from_map(&map));
                }
            }
        } else if let Some(map) = current.as_mut() {
            if let Some((key, value)) = trimmed.split_once(':') {
                let key = key.trim().trim_matches(|c| c == '"' || c == '\'');
                let value = value.trim();
                let value = value.strip_suffix(',').unwrap_or(value).trim();
                let value = value.trim_matches(|c| c == '"' || c == '\'');
                map.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
    }
    if records.is_empty() {
        None
    } else {
        Some(records)
    }
}
