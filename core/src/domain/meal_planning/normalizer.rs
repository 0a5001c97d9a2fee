use std::iter::Peekable;
use std::str::Chars;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z]*").expect("fence pattern is valid"));
static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```$").expect("fence pattern is valid"));

/// Remove a markdown code fence the model may have wrapped its answer in.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let start = LEADING_FENCE.find(trimmed).map_or(0, |m| m.end());
    let body = &trimmed[start..];
    let end = TRAILING_FENCE
        .find(body)
        .map_or(body.len(), |m| m.start());

    body[..end].trim_matches(|c: char| c == '`' || c.is_whitespace())
}

pub fn parse_json_response(raw: &str) -> Result<Value, CoreError> {
    serde_json::from_str(strip_code_fences(raw)).map_err(|e| CoreError::ResponseParse {
        message: format!("Failed to parse LLM response as JSON: {}", e),
        raw_output: raw.to_string(),
    })
}

/// Parse a literal list of strings such as `['Milk', "Eggs"]`.
///
/// Only quoted strings are accepted as elements; numbers, nested lists and
/// bare identifiers are rejected.
pub fn parse_item_list(raw: &str) -> Result<Vec<String>, CoreError> {
    let text = strip_code_fences(raw);
    ListParser::new(text)
        .parse()
        .map_err(|reason| CoreError::ResponseParse {
            message: format!("Failed to parse LLM response as a list of strings: {}", reason),
            raw_output: raw.to_string(),
        })
}

struct ListParser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> ListParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    fn parse(mut self) -> Result<Vec<String>, String> {
        self.skip_whitespace();
        self.expect('[')?;

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some(']') => {
                    self.chars.next();
                    break;
                }
                Some('\'') | Some('"') => {
                    items.push(self.string()?);
                    self.skip_whitespace();
                    match self.chars.next() {
                        Some(',') => continue,
                        Some(']') => break,
                        Some(c) => return Err(format!("expected ',' or ']', found '{}'", c)),
                        None => return Err("unterminated list".to_string()),
                    }
                }
                Some(c) => return Err(format!("expected a quoted string, found '{}'", c)),
                None => return Err("unterminated list".to_string()),
            }
        }

        self.skip_whitespace();
        match self.chars.next() {
            None => Ok(items),
            Some(c) => Err(format!("unexpected '{}' after list", c)),
        }
    }

    fn string(&mut self) -> Result<String, String> {
        let quote = self.chars.next().ok_or("expected a quote")?;
        let mut out = String::new();

        loop {
            match self.chars.next() {
                None | Some('\n') => return Err("unterminated string".to_string()),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char, String> {
        match self.chars.next() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('0') => Ok('\0'),
            Some(c @ ('\\' | '\'' | '"')) => Ok(c),
            Some('u') => {
                let hex: String = (0..4).filter_map(|_| self.chars.next()).collect();
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| format!("invalid unicode escape '\\u{}'", hex))
            }
            Some(c) => Err(format!("invalid escape '\\{}'", c)),
            None => Err("unterminated string".to_string()),
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        match self.chars.next() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(format!("expected '{}', found '{}'", expected, c)),
            None => Err(format!("expected '{}', found end of input", expected)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }
}
