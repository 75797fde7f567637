use std::borrow::Cow;
use std::fmt;

use time::{Duration, OffsetDateTime, UtcOffset};

use crate::case;
use crate::value::{self, Value};
use crate::{Priority, SameSite};

/// The key of a recognized cookie attribute.
///
/// [`AttributeKey::as_str()`] is the internal, camel-case key and
/// [`AttributeKey::wire_key()`] the spelling used in cookie strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// `Domain`.
    Domain,
    /// `Expires`.
    Expires,
    /// `HttpOnly`.
    HttpOnly,
    /// `Max-Age`.
    MaxAge,
    /// `Partitioned`.
    Partitioned,
    /// `Path`.
    Path,
    /// `Priority`.
    Priority,
    /// `SameSite`.
    SameSite,
    /// `Secure`.
    Secure,
}

impl AttributeKey {
    /// Every recognized key.
    pub const ALL: [AttributeKey; 9] = [
        AttributeKey::Domain,
        AttributeKey::Expires,
        AttributeKey::HttpOnly,
        AttributeKey::MaxAge,
        AttributeKey::Partitioned,
        AttributeKey::Path,
        AttributeKey::Priority,
        AttributeKey::SameSite,
        AttributeKey::Secure,
    ];

    /// The internal key, e.g. `"maxAge"`.
    pub fn as_str(&self) -> &'static str {
        match *self {
            AttributeKey::Domain => "domain",
            AttributeKey::Expires => "expires",
            AttributeKey::HttpOnly => "httpOnly",
            AttributeKey::MaxAge => "maxAge",
            AttributeKey::Partitioned => "partitioned",
            AttributeKey::Path => "path",
            AttributeKey::Priority => "priority",
            AttributeKey::SameSite => "sameSite",
            AttributeKey::Secure => "secure",
        }
    }

    /// The wire key, e.g. `"Max-Age"`.
    pub fn wire_key(&self) -> Cow<'static, str> {
        case::to_wire_key(self.as_str())
    }

    /// Looks up the recognized key matching the internal key `key`, ignoring
    /// ASCII case, so that `httponly` and `httpOnly` name the same attribute.
    pub fn from_internal(key: &str) -> Option<AttributeKey> {
        AttributeKey::ALL.into_iter().find(|k| k.as_str().eq_ignore_ascii_case(key))
    }

    /// Whether the attribute is a presence flag carrying a boolean.
    pub fn is_flag(&self) -> bool {
        matches!(self, AttributeKey::HttpOnly | AttributeKey::Partitioned | AttributeKey::Secure)
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cookie attribute with its typed value.
///
/// Its `Display` implementation writes the wire form, `Key=Value`:
///
/// ```rust
/// use docookie::Attribute;
/// use docookie::time::Duration;
///
/// assert_eq!(Attribute::MaxAge(Duration::seconds(10)).to_string(), "Max-Age=10");
/// assert_eq!(Attribute::HttpOnly(true).to_string(), "HttpOnly=true");
/// assert_eq!(Attribute::Path("/".into()).to_string(), "Path=/");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// The host to which the cookie is sent.
    Domain(String),
    /// The instant at which the cookie expires.
    Expires(OffsetDateTime),
    /// Whether scripts are forbidden from reading the cookie.
    HttpOnly(bool),
    /// The lifetime of the cookie. Written as a number of seconds, which may
    /// be fractional.
    MaxAge(Duration),
    /// Whether the cookie uses partitioned storage.
    Partitioned(bool),
    /// The URL path that must exist for the cookie to be sent.
    Path(String),
    /// The eviction priority.
    Priority(Priority),
    /// The cross-site request policy.
    SameSite(SameSite),
    /// Whether the cookie is only sent over `https:`.
    Secure(bool),
    /// An attribute without dedicated support, keyed by its internal key.
    Extension {
        /// The internal (camel-case) key.
        key: String,
        /// The decoded value.
        value: Value,
    },
}

impl Attribute {
    /// The internal key of `self`, e.g. `"maxAge"`.
    pub fn key(&self) -> &str {
        match self {
            Attribute::Extension { key, .. } => key,
            _ => self.known_key().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    /// The recognized key of `self`, or `None` for an extension.
    pub fn known_key(&self) -> Option<AttributeKey> {
        Some(match self {
            Attribute::Domain(_) => AttributeKey::Domain,
            Attribute::Expires(_) => AttributeKey::Expires,
            Attribute::HttpOnly(_) => AttributeKey::HttpOnly,
            Attribute::MaxAge(_) => AttributeKey::MaxAge,
            Attribute::Partitioned(_) => AttributeKey::Partitioned,
            Attribute::Path(_) => AttributeKey::Path,
            Attribute::Priority(_) => AttributeKey::Priority,
            Attribute::SameSite(_) => AttributeKey::SameSite,
            Attribute::Secure(_) => AttributeKey::Secure,
            Attribute::Extension { .. } => return None,
        })
    }

    /// The flag attribute for `key` set to `value`, or `None` if `key` is not
    /// a flag.
    pub(crate) fn flag(key: AttributeKey, value: bool) -> Option<Attribute> {
        match key {
            AttributeKey::HttpOnly => Some(Attribute::HttpOnly(value)),
            AttributeKey::Partitioned => Some(Attribute::Partitioned(value)),
            AttributeKey::Secure => Some(Attribute::Secure(value)),
            _ => None,
        }
    }

    /// The wire key of `self`, e.g. `"Max-Age"`.
    pub fn wire_key(&self) -> Cow<'_, str> {
        case::to_wire_key(self.key())
    }

    /// The encoded wire value of `self`. `Expires` is written as an HTTP date.
    pub fn wire_value(&self) -> String {
        match self {
            Attribute::Domain(s) | Attribute::Path(s) => s.clone(),
            Attribute::Expires(time) => {
                let time = time.to_offset(UtcOffset::UTC);
                time.format(&crate::parse::FMT1).unwrap_or_default()
            }
            Attribute::HttpOnly(b) | Attribute::Partitioned(b) | Attribute::Secure(b) => {
                b.to_string()
            }
            Attribute::MaxAge(age) => age.as_seconds_f64().to_string(),
            Attribute::Priority(p) => p.to_string(),
            Attribute::SameSite(s) => s.to_string(),
            Attribute::Extension { value, .. } => value::encode(Some(value)),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.wire_key(), self.wire_value())
    }
}
