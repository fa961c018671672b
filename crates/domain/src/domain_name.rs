use super::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

/// Fully-qualified, lower-cased domain name with a trailing dot (`example.org.`).
///
/// Equality and hashing operate on the normalized text, so two names that
/// differ only in case or in the presence of the final dot compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn root() -> Self {
        Self(Arc::from("."))
    }

    /// Accepts presentation text, including `\DDD` and `\X` escapes as
    /// produced by hickory's `Name::to_ascii`. Lengths are counted in wire octets.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }
        if trimmed == "." {
            return Ok(Self::root());
        }

        let mut normalized = String::with_capacity(trimmed.len() + 1);
        let mut wire_len = 1;
        let mut rest = trimmed;

        while !rest.is_empty() {
            let (label, octets, next) = split_label(rest).ok_or_else(|| {
                DomainError::InvalidDomainName(format!("dangling escape in '{}'", input))
            })?;

            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    input
                )));
            }
            if octets > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' exceeds {} octets",
                    label, MAX_LABEL_LEN
                )));
            }
            if label.chars().any(|c| c.is_whitespace() || c.is_control()) {
                return Err(DomainError::InvalidDomainName(format!(
                    "invalid character in '{}'",
                    input
                )));
            }

            wire_len += octets + 1;
            normalized.push_str(&label.to_ascii_lowercase());
            normalized.push('.');
            rest = next;
        }

        if wire_len > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' exceeds {} octets",
                input, MAX_NAME_LEN
            )));
        }

        Ok(Self(Arc::from(normalized)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.as_str() == "."
    }

    /// Name with the leftmost label removed; `None` for the root.
    pub fn parent(&self) -> Option<DomainName> {
        if self.is_root() {
            return None;
        }
        let (_, _, rest) = split_label(self.as_str())?;
        if rest.is_empty() {
            Some(Self::root())
        } else {
            Some(Self(Arc::from(rest)))
        }
    }
}

/// Splits the leftmost label off `text` at the first unescaped dot.
///
/// Returns the label text, its length in wire octets and the remainder after
/// the dot. `None` when an escape runs past the end of the input.
fn split_label(text: &str) -> Option<(&str, usize, &str)> {
    let bytes = text.as_bytes();
    let mut octets = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'.' => return Some((&text[..i], octets, &text[i + 1..])),
            b'\\' => {
                let decimal = bytes
                    .get(i + 1..i + 4)
                    .is_some_and(|digits| digits.iter().all(u8::is_ascii_digit));
                if decimal {
                    i += 4;
                } else {
                    // Escaped character, possibly multi-byte.
                    let escaped = text[i + 1..].chars().next()?;
                    i += 1 + escaped.len_utf8();
                    octets += escaped.len_utf8() - 1;
                }
            }
            _ => i += 1,
        }
        octets += 1;
    }

    Some((text, octets, ""))
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
