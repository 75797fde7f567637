use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::str::Utf8Error;

use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime};

use crate::attribute::{Attribute, AttributeKey};
use crate::value;
use crate::{case, Cookie};

// IMF-fixdate, as produced by `Date.prototype.toUTCString()`.
pub static FMT1: &[BorrowedFormatItem<'_>] = format_description!("[weekday repr:short], [day] [month repr:short] [year padding:none] [hour]:[minute]:[second] GMT");
// ANSI C's asctime().
pub static FMT2: &[BorrowedFormatItem<'_>] = format_description!("[weekday repr:short] [month repr:short] [day padding:space] [hour]:[minute]:[second] [year padding:none]");
// A bare ISO 8601 calendar date.
pub static FMT3: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Enum corresponding to a parsing error.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum ParseError {
    /// The cookie did not contain a name/value pair.
    MissingPair,
    /// The cookie's name was empty.
    EmptyName,
    /// Decoding the cookie's name or value resulted in invalid UTF-8.
    Utf8(Utf8Error),
}

impl ParseError {
    /// Returns a description of this error as a string
    pub fn as_str(&self) -> &'static str {
        match *self {
            ParseError::MissingPair => "the cookie is missing a name/value pair",
            ParseError::EmptyName => "the cookie's name is empty",
            ParseError::Utf8(_) => {
                "decoding the cookie's name or value resulted in invalid UTF-8"
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Utf8Error> for ParseError {
    fn from(error: Utf8Error) -> ParseError {
        ParseError::Utf8(error)
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "percent-encode")]
fn decode_component(s: &str) -> Result<Cow<'_, str>, Utf8Error> {
    percent_encoding::percent_decode(s.as_bytes()).decode_utf8()
}

#[cfg(not(feature = "percent-encode"))]
fn decode_component(s: &str) -> Result<Cow<'_, str>, Utf8Error> {
    Ok(Cow::Borrowed(s))
}

/// Parses a date the way a browser's `Date` constructor would for the
/// formats that appear in cookies: RFC 3339 / ISO 8601, IMF-fixdate,
/// RFC 2822, asctime, and a bare calendar date (taken as midnight UTC).
///
/// Returns `None` if `s` is in none of those formats.
pub(crate) fn parse_date(s: &str) -> Option<OffsetDateTime> {
    let s = s.trim();
    OffsetDateTime::parse(s, &Rfc3339).ok()
        .or_else(|| PrimitiveDateTime::parse(s, &FMT1).ok().map(|d| d.assume_utc()))
        .or_else(|| OffsetDateTime::parse(s, &Rfc2822).ok())
        .or_else(|| PrimitiveDateTime::parse(s, &FMT2).ok().map(|d| d.assume_utc()))
        .or_else(|| Date::parse(s, &FMT3).ok().map(|d| d.midnight().assume_utc()))
}

/// Decodes the raw wire value of the attribute with internal key `key`.
///
/// * `expires` yields a date, or `None` if `raw` is missing or not a date.
/// * `httpOnly`, `secure`, and `partitioned` are presence flags: they are
///   `true` unless `raw` is exactly `false`, even when `raw` is missing.
/// * Every other attribute is `None` if `raw` is missing or blank, or if it
///   can't be represented in the attribute's type. Unrecognized keys decode
///   through [`value::decode()`] into [`Attribute::Extension`].
///
/// # Example
///
/// ```rust
/// use docookie::{parse_attribute_value, Attribute};
///
/// assert_eq!(parse_attribute_value(None, "httpOnly"), Some(Attribute::HttpOnly(true)));
/// assert_eq!(parse_attribute_value(Some("false"), "secure"), Some(Attribute::Secure(false)));
/// assert_eq!(parse_attribute_value(Some("Invalid Date"), "expires"), None);
/// assert_eq!(parse_attribute_value(Some(""), "path"), None);
/// ```
pub fn parse_attribute_value(raw: Option<&str>, key: &str) -> Option<Attribute> {
    let raw = raw.map(str::trim);
    let known = match AttributeKey::from_internal(key) {
        Some(known) => known,
        None => {
            let value = value::decode(raw)?;
            return Some(Attribute::Extension { key: key.to_string(), value });
        }
    };

    if known.is_flag() {
        return Attribute::flag(known, raw != Some("false"));
    }

    let present = raw.filter(|v| !v.is_empty());
    match known {
        AttributeKey::Expires => present.and_then(parse_date).map(Attribute::Expires),
        AttributeKey::MaxAge => present
            .and_then(value::parse_numeric)
            .and_then(Duration::checked_seconds_f64)
            .map(Attribute::MaxAge),
        AttributeKey::Domain => present.map(|v| Attribute::Domain(v.to_string())),
        AttributeKey::Path => present.map(|v| Attribute::Path(v.to_string())),
        AttributeKey::Priority => present.and_then(|v| v.parse().ok()).map(Attribute::Priority),
        AttributeKey::SameSite => present.and_then(|v| v.parse().ok()).map(Attribute::SameSite),
        AttributeKey::HttpOnly | AttributeKey::Partitioned | AttributeKey::Secure => None,
    }
}

pub(crate) fn parse_cookie(s: &str) -> Result<Cookie, ParseError> {
    let mut segments = s.split(';');
    let pair = segments.next().unwrap_or_default();
    if pair.trim().is_empty() {
        return Err(ParseError::MissingPair);
    }

    // The value is kept untrimmed: surrounding whitespace is part of it.
    let (name, raw_value) = match pair.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value)),
        None => (pair.trim(), None),
    };

    let name = decode_component(name)?;
    if name.is_empty() {
        return Err(ParseError::EmptyName);
    }

    let raw_value = raw_value.map(decode_component).transpose()?;
    let mut cookie = Cookie::named(name.into_owned());
    cookie.value = value::decode(raw_value.as_deref());

    for segment in segments {
        let (key, raw) = match segment.split_once('=') {
            Some((key, raw)) => (key, Some(raw)),
            None => (segment, None),
        };

        let key = case::to_internal_key(key);
        if key.is_empty() {
            tracing::trace!(segment, "skipping cookie attribute without a key");
            continue;
        }

        match parse_attribute_value(raw, &key) {
            Some(attribute) => cookie.set_attribute(attribute),
            None => tracing::trace!(segment, "skipping cookie attribute without a usable value"),
        }
    }

    Ok(cookie)
}
