// paygtoken/src/protocol/encoding.rs

//! Rendering of packed tokens for keypad entry.
//!
//! Three renderings exist:
//!
//! * no encoding spec: base 10 grouped in threes from the right
//!   (`123456789` -> `"123 456 789"`);
//! * a spec of the form `prefix+low-high+suffix[+spaceN]`: a positional
//!   numeral system of base `high - low + 1` whose digit `d` is written as
//!   the decimal number `low + d`, wrapped in the literal prefix/suffix and
//!   optionally grouped in runs of `N` characters (default 3);
//! * any other spec string: plain, ungrouped base 10.

use crate::constants::DEFAULT_GROUP_SIZE;
use crate::types::PackedToken;

/// Parsed custom numeral-system spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingSpec {
    pub prefix: String,
    pub low: u32,
    pub high: u32,
    pub suffix: String,
    pub group: Option<usize>,
}

impl EncodingSpec {
    /// Parse `prefix+low-high+suffix[+spaceN]`. Returns `None` when the
    /// string does not follow that shape or the range has fewer than two
    /// digits.
    pub fn parse(spec: &str) -> Option<Self> {
        let parts: Vec<&str> = spec.split('+').collect();
        if parts.len() != 3 && parts.len() != 4 {
            return None;
        }

        let (low, high) = parts[1].split_once('-')?;
        let low = parse_digits(low)?;
        let high = parse_digits(high)?;
        if high <= low {
            return None;
        }

        let group = match parts.get(3) {
            None => None,
            Some(token) => {
                let n = token.strip_prefix("space")?;
                if n.is_empty() {
                    Some(DEFAULT_GROUP_SIZE)
                } else {
                    Some(parse_digits(n).filter(|n| *n > 0)? as usize)
                }
            }
        };

        Some(Self {
            prefix: parts[0].to_string(),
            low,
            high,
            suffix: parts[2].to_string(),
            group,
        })
    }

    pub fn base(&self) -> u64 {
        (self.high - self.low) as u64 + 1
    }

    /// Body digits only, most significant first.
    pub fn render_body(&self, mut value: u64) -> String {
        let base = self.base();
        let mut digits = Vec::new();
        loop {
            digits.push(self.low as u64 + value % base);
            value /= base;
            if value == 0 {
                break;
            }
        }
        digits.iter().rev().map(|d| d.to_string()).collect()
    }

    pub fn encode(&self, token: PackedToken) -> String {
        let whole = format!("{}{}{}", self.prefix, self.render_body(token.value()), self.suffix);
        match self.group {
            Some(n) => group_from_right(&whole, n),
            None => whole,
        }
    }

    /// Reverse `encode`. Only possible when every digit symbol is a single
    /// character, i.e. `high <= 9`.
    pub fn decode(&self, text: &str) -> Option<PackedToken> {
        if self.high > 9 {
            return None;
        }

        let (text, prefix, suffix) = if self.group.is_some() {
            (strip_spaces(text), strip_spaces(&self.prefix), strip_spaces(&self.suffix))
        } else {
            (text.to_string(), self.prefix.clone(), self.suffix.clone())
        };

        let body = text.strip_prefix(prefix.as_str())?.strip_suffix(suffix.as_str())?;
        if body.is_empty() {
            return None;
        }

        let base = self.base();
        body.chars().try_fold(0u64, |acc, c| {
            let d = c.to_digit(10)?.checked_sub(self.low)? as u64;
            if d >= base {
                return None;
            }
            acc.checked_mul(base)?.checked_add(d)
        })
        .map(PackedToken::new)
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| *c != ' ').collect()
}

/// Insert a space every `n` characters counting from the right.
pub fn group_from_right(s: &str, n: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if n == 0 || chars.len() <= n {
        return s.to_string();
    }

    let mut out = String::with_capacity(chars.len() + chars.len() / n);
    let head = chars.len() % n;
    for (i, c) in chars.iter().enumerate() {
        if i != 0 && (i + n - head) % n == 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

/// How a token is rendered, resolved once from the optional spec string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenEncoding {
    /// Base 10, grouped in threes.
    Grouped,
    Custom(EncodingSpec),
    /// Base 10 without grouping (unrecognised spec string).
    Plain,
}

impl TokenEncoding {
    /// An absent or blank spec selects the grouped default. Otherwise the
    /// string is parsed as given, so prefix and suffix keep their spaces.
    pub fn from_spec(spec: Option<&str>) -> Self {
        match spec.filter(|s| !s.trim().is_empty()) {
            None => Self::Grouped,
            Some(s) => match EncodingSpec::parse(s) {
                Some(custom) => Self::Custom(custom),
                None => {
                    log::debug!("encoding spec '{}' not recognised, using plain decimal", s);
                    Self::Plain
                }
            },
        }
    }

    pub fn encode(&self, token: PackedToken) -> String {
        match self {
            Self::Grouped => group_from_right(&token.value().to_string(), DEFAULT_GROUP_SIZE),
            Self::Custom(spec) => spec.encode(token),
            Self::Plain => token.value().to_string(),
        }
    }

    pub fn decode(&self, text: &str) -> Option<PackedToken> {
        match self {
            Self::Grouped => decode_default(text),
            Self::Custom(spec) => spec.decode(text),
            Self::Plain => text.trim().parse().ok().map(PackedToken::new),
        }
    }
}

/// Render with the default grouped decimal encoding.
pub fn encode_default(token: PackedToken) -> String {
    TokenEncoding::Grouped.encode(token)
}

/// Strip grouping spaces and parse base 10.
pub fn decode_default(text: &str) -> Option<PackedToken> {
    let digits = strip_spaces(text.trim());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(PackedToken::new)
}
