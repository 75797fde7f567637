//! Conversion of arbitrary cookie values to and from their string form.
//!
//! A cookie value on the wire is just text. [`decode`] recovers a typed
//! [`Value`] from that text using the following precedence:
//!
//!   1. blank input decodes to nothing at all,
//!   2. numeric text decodes to [`Value::Number`],
//!   3. text that reads as a date decodes to [`Value::Date`],
//!   4. valid JSON decodes to the corresponding JSON value,
//!   5. anything else is kept verbatim as [`Value::Text`].
//!
//! [`encode`] is the inverse: dates are written in ISO 8601 form with
//! millisecond precision, arrays and objects as compact JSON, everything else
//! in its natural textual form.

use std::fmt;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// ISO 8601 with millisecond precision, always in UTC.
static ISO_FMT: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// A decoded cookie value.
///
/// # Example
///
/// ```rust
/// use docookie::Value;
///
/// assert_eq!(Value::from("abc").to_string(), "abc");
/// assert_eq!(Value::from(420).to_string(), "420");
/// assert_eq!(Value::from(true).to_string(), "true");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The JSON `null` literal.
    Null,
    /// A boolean, from the JSON literals `true` and `false`.
    Bool(bool),
    /// Any numeric value.
    Number(f64),
    /// Plain text that is neither numeric, a date, nor JSON. Surrounding
    /// whitespace is kept; text that only differs from a number, a date or
    /// JSON by whitespace decodes as that instead.
    Text(String),
    /// A point in time.
    Date(OffsetDateTime),
    /// A JSON array or object.
    Json(serde_json::Value),
}

impl Value {
    /// Returns the inner text if `self` is [`Value::Text`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Value;
    ///
    /// assert_eq!(Value::from("abc").as_str(), Some("abc"));
    /// assert_eq!(Value::from(1).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner number if `self` is [`Value::Number`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// let c = Cookie::parse("count=12.5").unwrap();
    /// assert_eq!(c.value().and_then(|v| v.as_f64()), Some(12.5));
    ///
    /// let c = Cookie::parse("count=twelve").unwrap();
    /// assert_eq!(c.value().and_then(|v| v.as_f64()), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the inner boolean if `self` is [`Value::Bool`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// let c = Cookie::parse("consent=false").unwrap();
    /// assert_eq!(c.value().and_then(|v| v.as_bool()), Some(false));
    ///
    /// let c = Cookie::parse("consent=0").unwrap();
    /// assert_eq!(c.value().and_then(|v| v.as_bool()), None);
    /// ```
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the inner date if `self` is [`Value::Date`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// let c = Cookie::parse("seen=2025-04-20T16:20:00.000Z").unwrap();
    /// assert_eq!(c.value().and_then(|v| v.as_date()).map(|d| d.hour()), Some(16));
    ///
    /// let c = Cookie::parse("seen=never").unwrap();
    /// assert_eq!(c.value().and_then(|v| v.as_date()), None);
    /// ```
    pub fn as_date(&self) -> Option<OffsetDateTime> {
        match *self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the inner JSON if `self` is [`Value::Json`].
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Json(j) => Some(j),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Date(d) => {
                let utc = d.to_offset(UtcOffset::UTC);
                f.write_str(&utc.format(&ISO_FMT).map_err(|_| fmt::Error)?)
            }
            Value::Json(j) => write!(f, "{}", j),
        }
    }
}

/// Encodes `value` as the text stored in a cookie.
///
/// An absent value encodes to the empty string.
///
/// # Example
///
/// ```rust
/// use docookie::value::{encode, Value};
///
/// assert_eq!(encode(None), "");
/// assert_eq!(encode(Some(&Value::Null)), "null");
/// assert_eq!(encode(Some(&Value::from(1.5))), "1.5");
/// ```
pub fn encode(value: Option<&Value>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Decodes the text stored in a cookie into a [`Value`].
///
/// Returns `None` if `raw` is missing or blank.
///
/// # Example
///
/// ```rust
/// use docookie::value::{decode, Value};
///
/// assert_eq!(decode(Some("12345")), Some(Value::Number(12345.0)));
/// assert_eq!(decode(Some("true")), Some(Value::Bool(true)));
/// assert_eq!(decode(Some("String value")), Some(Value::from("String value")));
/// assert_eq!(decode(Some(" ")), None);
/// assert_eq!(decode(None), None);
/// ```
pub fn decode(raw: Option<&str>) -> Option<Value> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(n) = parse_numeric(trimmed) {
        return Some(Value::Number(n));
    }

    if let Some(date) = crate::parse::parse_date(trimmed) {
        return Some(Value::Date(date));
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(json) => Some(Value::from(json)),
        Err(_) => Some(Value::Text(raw.to_string())),
    }
}

/// Parses `s` as a finite decimal number. Rejects `inf`/`NaN` spellings.
pub(crate) fn parse_numeric(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_f64() {
                Some(n) => Value::Number(n),
                None => Value::Json(Json::Number(n)),
            },
            Json::String(s) => Value::Text(s),
            json @ (Json::Array(_) | Json::Object(_)) => Value::Json(json),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(d: OffsetDateTime) -> Self {
        Value::Date(d)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => ($(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Number(n as f64)
            }
        }
    )*)
}

impl_from_number!(i32, i64, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn encodes_dates_as_iso() {
        let date = datetime!(2025-04-20 16:20:00 UTC);
        assert_eq!(encode(Some(&Value::Date(date))), "2025-04-20T16:20:00.000Z");

        let date = datetime!(2025-04-20 18:20:00.5 +2);
        assert_eq!(encode(Some(&Value::Date(date))), "2025-04-20T16:20:00.500Z");
    }

    #[test]
    fn encodes_json() {
        let object = serde_json::json!({ "prop": "value", "prop2": true });
        assert_eq!(encode(Some(&Value::Json(object))), r#"{"prop":"value","prop2":true}"#);

        let array = serde_json::json!([1, 2, true, null]);
        assert_eq!(encode(Some(&Value::Json(array))), "[1,2,true,null]");
    }

    #[test]
    fn encodes_scalars() {
        assert_eq!(encode(Some(&Value::Bool(true))), "true");
        assert_eq!(encode(Some(&Value::Bool(false))), "false");
        assert_eq!(encode(Some(&Value::from(0))), "0");
        assert_eq!(encode(Some(&Value::from(420))), "420");
        assert_eq!(encode(Some(&Value::Null)), "null");
        assert_eq!(encode(None), "");
    }

    #[test]
    fn decodes_dates() {
        let date = datetime!(2025-04-20 16:20:00.123 UTC);
        let encoded = encode(Some(&Value::Date(date)));
        assert_eq!(decode(Some(&encoded)), Some(Value::Date(date)));

        let http = decode(Some("Sun, 20 Apr 2025 16:20:00 GMT"));
        assert_eq!(http, Some(Value::Date(datetime!(2025-04-20 16:20:00 UTC))));
    }

    #[test]
    fn decodes_numbers() {
        assert_eq!(decode(Some("12345")), Some(Value::Number(12345.0)));
        assert_eq!(decode(Some("-1.5")), Some(Value::Number(-1.5)));
        assert_eq!(decode(Some("NaN")), Some(Value::from("NaN")));
        assert_eq!(decode(Some("inf")), Some(Value::from("inf")));
    }

    #[test]
    fn decodes_json() {
        assert_eq!(decode(Some("true")), Some(Value::Bool(true)));
        assert_eq!(decode(Some("null")), Some(Value::Null));
        assert_eq!(decode(Some(r#""quoted""#)), Some(Value::from("quoted")));

        let object = decode(Some(r#"{"key":"value"}"#)).unwrap();
        assert_eq!(object, Value::Json(serde_json::json!({ "key": "value" })));

        let array = decode(Some("[1,2,3,4,5]")).unwrap();
        assert_eq!(array, Value::Json(serde_json::json!([1, 2, 3, 4, 5])));
    }

    #[test]
    fn decodes_fallback_and_blank() {
        assert_eq!(decode(Some("String value")), Some(Value::from("String value")));
        assert_eq!(decode(Some("{not json")), Some(Value::from("{not json")));
        assert_eq!(decode(Some(" ")), None);
        assert_eq!(decode(Some("")), None);
        assert_eq!(decode(None), None);
    }
}
