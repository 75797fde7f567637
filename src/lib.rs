//! Parsing and serialization of `Document.cookie` strings.
//!
//! This crate provides the [`Cookie`] type, an ordered, typed view of one
//! cookie and its attributes, the [`CookieJar`] type, a collection of cookies
//! keyed by name, and [`Document`], which reads and writes cookies through a
//! pluggable [`CookieStore`].
//!
//! # Usage
//!
//! Add the following to the `[dependencies]` section of your `Cargo.toml`:
//!
//! ```toml
//! docookie = "0.1"
//! ```
//!
//! # Wire format
//!
//! A cookie is written as its `name=value` pair followed by its attributes,
//! each as `Key=Value`, separated by `;` without whitespace:
//!
//! ```text
//! name=value;Path=/;Expires=Wed, 21 Oct 2015 07:28:00 GMT;Max-Age=1800
//! ```
//!
//! Every attribute carries an explicit value, including the boolean
//! `HttpOnly`, `Secure` and `Partitioned` flags. When parsing, those flags are
//! `true` unless their value is exactly `false`. Many cookies are joined with
//! `"; "`.
//!
//! # Features
//!
//! This crate exposes several features, all of which are disabled by default:
//!
//! * **`percent-encode`**
//!
//!   Enables _percent encoding and decoding_ of names and values in cookies.
//!
//!   When this feature is enabled, the [`Display`](std::fmt::Display)
//!   implementation of [`Cookie`] percent-encodes the name and value of the
//!   cookie, and [`Cookie::parse()`] percent-decodes them.
//!
//! * **`serde`**
//!
//!   Implements `Serialize` and `Deserialize` for [`Cookie`] (as its wire
//!   string), [`SameSite`], and [`Priority`].
//!
//! * **`web`**
//!
//!   Enables [`HtmlDocumentStore`], a [`CookieStore`] backed by the browser's
//!   `document.cookie`.
//!
//! You can enable features via `Cargo.toml`:
//!
//! ```toml
//! [dependencies.docookie]
//! features = ["percent-encode", "serde"]
//! ```

#![cfg_attr(all(nightly, doc), feature(doc_cfg))]
#![deny(missing_docs)]

pub use time;

mod attribute;
mod builder;
mod draft;
mod iter;
mod jar;
mod parse;
mod store;

pub mod case;
pub mod value;

#[cfg(feature = "serde")]
mod serialize;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "percent-encode")]
use percent_encoding::{AsciiSet, percent_encode};
use time::{Duration, OffsetDateTime};

pub use crate::attribute::{Attribute, AttributeKey};
pub use crate::builder::{CookieInput, CookieOptions, Expiry};
pub use crate::draft::{Priority, SameSite, UnknownVariant};
pub use crate::iter::SplitCookies;
pub use crate::jar::CookieJar;
pub use crate::parse::{parse_attribute_value, ParseError};
pub use crate::store::{CookieStore, Detached, Document, MemoryStore, StoreError};
pub use crate::value::Value;

#[cfg(feature = "web")]
#[cfg_attr(all(nightly, doc), doc(cfg(feature = "web")))]
pub use crate::store::HtmlDocumentStore;

/// https://url.spec.whatwg.org/#fragment-percent-encode-set
#[cfg(feature = "percent-encode")]
const FRAGMENT_ENCODE_SET: &AsciiSet = &percent_encoding::CONTROLS
    .add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// https://url.spec.whatwg.org/#path-percent-encode-set
#[cfg(feature = "percent-encode")]
const PATH_ENCODE_SET: &AsciiSet = &FRAGMENT_ENCODE_SET
    .add(b'#').add(b'?').add(b'{').add(b'}');

/// https://url.spec.whatwg.org/#userinfo-percent-encode-set
#[cfg(feature = "percent-encode")]
const USERINFO_ENCODE_SET: &AsciiSet = &PATH_ENCODE_SET
    .add(b'/').add(b':').add(b';').add(b'=').add(b'@').add(b'[').add(b'\\')
    .add(b']').add(b'^').add(b'|').add(b'%');

/// Representation of a cookie as found in `Document.cookie`.
///
/// A `Cookie` is a name, an optional [`Value`], and an ordered set of
/// [`Attribute`]s with unique keys. Attributes keep the order in which they
/// were parsed or set.
///
/// # Constructing a `Cookie`
///
/// To construct a cookie with only a name/value, use [`Cookie::new()`]:
///
/// ```rust
/// use docookie::Cookie;
///
/// let cookie = Cookie::new("name", "value");
/// assert_eq!(cookie.to_string(), "name=value");
/// ```
///
/// To construct more elaborate cookies, use [`Cookie::build()`] and
/// [`CookieOptions`] methods:
///
/// ```rust
/// use docookie::{Cookie, SameSite};
///
/// let cookie = Cookie::from_options(Cookie::build("name")
///     .value("value")
///     .domain("www.rust-lang.org")
///     .path("/")
///     .secure(true)
///     .same_site(SameSite::Strict));
///
/// assert_eq!(cookie.to_string(),
///     "name=value;Path=/;Domain=www.rust-lang.org;Secure=true;SameSite=Strict");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cookie {
    /// The cookie's name.
    pub(crate) name: String,
    /// The cookie's value, if any.
    pub(crate) value: Option<Value>,
    /// The cookie's attributes, in insertion order, unique by key.
    pub(crate) attributes: Vec<Attribute>,
}

impl Cookie {
    /// Creates a new `Cookie` with the given name and value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::{Cookie, Value};
    ///
    /// let cookie = Cookie::new("name", 42);
    /// assert_eq!(cookie.name(), "name");
    /// assert_eq!(cookie.value(), Some(&Value::Number(42.0)));
    /// ```
    pub fn new<N, V>(name: N, value: V) -> Self
        where N: Into<String>,
              V: Into<Value>
    {
        Cookie { name: name.into(), value: Some(value.into()), attributes: Vec::new() }
    }

    /// Creates a new `Cookie` with the given name and no value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// let cookie = Cookie::named("name");
    /// assert_eq!(cookie.name(), "name");
    /// assert!(cookie.value().is_none());
    /// ```
    pub fn named<N: Into<String>>(name: N) -> Self {
        Cookie { name: name.into(), value: None, attributes: Vec::new() }
    }

    /// Starts building a cookie named `name`. Equivalent to
    /// [`CookieOptions::new()`].
    #[inline(always)]
    pub fn build<N: Into<String>>(name: N) -> CookieOptions {
        CookieOptions::new(name)
    }

    /// Parses a `Cookie` from a single cookie string.
    ///
    /// The first `;`-separated segment is the `name=value` pair; every other
    /// segment is an attribute. Segments without a key, and attributes whose
    /// value is missing or invalid, are skipped. An empty input or an empty
    /// name is an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::{Cookie, ParseError};
    ///
    /// let c = Cookie::parse("foo=bar;HttpOnly;Path=/").unwrap();
    /// assert_eq!(c.name(), "foo");
    /// assert_eq!(c.http_only(), Some(true));
    /// assert_eq!(c.path(), Some("/"));
    ///
    /// assert_eq!(Cookie::parse(""), Err(ParseError::MissingPair));
    /// ```
    #[inline]
    pub fn parse(s: &str) -> Result<Cookie, ParseError> {
        parse::parse_cookie(s)
    }

    /// Parses the `"; "`-joined cookie list `string`, lazily, one cookie at a
    /// time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// let string = "name=value;Path=/; other=key%20value";
    /// for cookie in Cookie::split_parse(string) {
    ///     let cookie = cookie.unwrap();
    ///     match cookie.name() {
    ///         "name" => assert_eq!(cookie.path(), Some("/")),
    ///         "other" => assert!(cookie.value().is_some()),
    ///         _ => unreachable!(),
    ///     }
    /// }
    /// ```
    #[inline(always)]
    pub fn split_parse(string: &str) -> SplitCookies<'_> {
        SplitCookies::new(string)
    }

    /// Returns the parsed cookie for `input`: [`CookieOptions`] are built into
    /// a cookie, an already parsed [`Cookie`] is returned as is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::{Cookie, CookieOptions};
    ///
    /// let cookie = Cookie::from_options(CookieOptions::new("name").value("value"));
    /// assert_eq!(Cookie::from_options(cookie.clone()), cookie);
    /// ```
    #[inline]
    pub fn from_options<I: Into<CookieInput>>(input: I) -> Cookie {
        input.into().into_cookie()
    }

    /// Serializes `input` into its cookie string, building it first if
    /// it is unparsed [`CookieOptions`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::{Cookie, CookieOptions};
    /// use docookie::time::Duration;
    ///
    /// let options = CookieOptions::new("c").max_age(Duration::seconds(10));
    /// assert_eq!(Cookie::serialize(options), "c=;Max-Age=10");
    /// ```
    #[inline]
    pub fn serialize<I: Into<CookieInput>>(input: I) -> String {
        Cookie::from_options(input).to_string()
    }

    /// Returns the name of `self`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of `self`, if any.
    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Returns an iterator over the attributes of `self` in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// let c = Cookie::parse("name=value;Secure;Path=/").unwrap();
    /// let keys: Vec<_> = c.attributes().map(|a| a.key()).collect();
    /// assert_eq!(keys, ["secure", "path"]);
    /// ```
    #[inline]
    pub fn attributes(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    /// Returns the attribute with internal key `key`, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::{Attribute, Cookie};
    ///
    /// let c = Cookie::parse("name=value;Secure").unwrap();
    /// assert_eq!(c.attribute("secure"), Some(&Attribute::Secure(true)));
    /// assert_eq!(c.attribute("path"), None);
    /// ```
    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.key() == key)
    }

    fn known(&self, key: AttributeKey) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.known_key() == Some(key))
    }

    /// Returns the `Domain` of the cookie if one was specified.
    #[inline]
    pub fn domain(&self) -> Option<&str> {
        match self.known(AttributeKey::Domain) {
            Some(Attribute::Domain(domain)) => Some(domain),
            _ => None,
        }
    }

    /// Returns the `Expires` date-time of the cookie if one was specified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// let c = Cookie::parse("name=value").unwrap();
    /// assert_eq!(c.expires(), None);
    ///
    /// let c = Cookie::parse("name=value;Expires=Wed, 21 Oct 2017 07:28:00 GMT").unwrap();
    /// assert_eq!(c.expires().map(|t| t.year()), Some(2017));
    /// ```
    #[inline]
    pub fn expires(&self) -> Option<OffsetDateTime> {
        match self.known(AttributeKey::Expires) {
            Some(Attribute::Expires(time)) => Some(*time),
            _ => None,
        }
    }

    /// Returns the `HttpOnly` flag of the cookie if one was specified.
    #[inline]
    pub fn http_only(&self) -> Option<bool> {
        match self.known(AttributeKey::HttpOnly) {
            Some(Attribute::HttpOnly(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the `Max-Age` of the cookie if one was specified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// let c = Cookie::parse("name=value;Max-Age=3600").unwrap();
    /// assert_eq!(c.max_age().map(|age| age.whole_hours()), Some(1));
    /// ```
    #[inline]
    pub fn max_age(&self) -> Option<Duration> {
        match self.known(AttributeKey::MaxAge) {
            Some(Attribute::MaxAge(age)) => Some(*age),
            _ => None,
        }
    }

    /// Returns the `Partitioned` flag of the cookie if one was specified.
    #[inline]
    pub fn partitioned(&self) -> Option<bool> {
        match self.known(AttributeKey::Partitioned) {
            Some(Attribute::Partitioned(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the `Path` of the cookie if one was specified.
    #[inline]
    pub fn path(&self) -> Option<&str> {
        match self.known(AttributeKey::Path) {
            Some(Attribute::Path(path)) => Some(path),
            _ => None,
        }
    }

    /// Returns the `Priority` of the cookie if one was specified.
    #[inline]
    pub fn priority(&self) -> Option<Priority> {
        match self.known(AttributeKey::Priority) {
            Some(Attribute::Priority(priority)) => Some(*priority),
            _ => None,
        }
    }

    /// Returns the `SameSite` policy of the cookie if one was specified.
    #[inline]
    pub fn same_site(&self) -> Option<SameSite> {
        match self.known(AttributeKey::SameSite) {
            Some(Attribute::SameSite(same_site)) => Some(*same_site),
            _ => None,
        }
    }

    /// Returns the `Secure` flag of the cookie if one was specified.
    #[inline]
    pub fn secure(&self) -> Option<bool> {
        match self.known(AttributeKey::Secure) {
            Some(Attribute::Secure(value)) => Some(*value),
            _ => None,
        }
    }

    /// Sets the name of `self` to `name`.
    #[inline]
    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = name.into();
    }

    /// Sets the value of `self` to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::{Cookie, Value};
    ///
    /// let mut c = Cookie::named("name");
    /// c.set_value("bar");
    /// assert_eq!(c.value(), Some(&Value::from("bar")));
    /// ```
    #[inline]
    pub fn set_value<V: Into<Value>>(&mut self, value: V) {
        self.value = Some(value.into());
    }

    /// Removes the value of `self`, returning it.
    #[inline]
    pub fn unset_value(&mut self) -> Option<Value> {
        self.value.take()
    }

    /// Sets `attribute` on `self`. An existing attribute with the same key is
    /// replaced where it stands; otherwise `attribute` is appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::{Attribute, Cookie};
    ///
    /// let mut c = Cookie::parse("name=value;Path=/a;Secure").unwrap();
    /// c.set_attribute(Attribute::Path("/b".into()));
    /// c.set_attribute(Attribute::HttpOnly(true));
    /// assert_eq!(c.to_string(), "name=value;Path=/b;Secure=true;HttpOnly=true");
    /// ```
    pub fn set_attribute(&mut self, attribute: Attribute) {
        match self.attributes.iter_mut().find(|a| a.key() == attribute.key()) {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }

    /// Removes the attribute with internal key `key`, returning it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// let mut c = Cookie::parse("name=value;Path=/;Secure").unwrap();
    /// assert!(c.remove_attribute("path").is_some());
    /// assert!(c.remove_attribute("path").is_none());
    /// assert_eq!(c.to_string(), "name=value;Secure=true");
    /// ```
    pub fn remove_attribute(&mut self, key: &str) -> Option<Attribute> {
        let i = self.attributes.iter().position(|a| a.key() == key)?;
        Some(self.attributes.remove(i))
    }

    /// Sets the `Domain` of `self`.
    #[inline]
    pub fn set_domain<D: Into<String>>(&mut self, domain: D) {
        self.set_attribute(Attribute::Domain(domain.into()));
    }

    /// Sets the `Expires` date-time of `self`.
    #[inline]
    pub fn set_expires(&mut self, time: OffsetDateTime) {
        self.set_attribute(Attribute::Expires(time));
    }

    /// Sets the `HttpOnly` flag of `self`.
    #[inline]
    pub fn set_http_only(&mut self, value: bool) {
        self.set_attribute(Attribute::HttpOnly(value));
    }

    /// Sets the `Max-Age` of `self`.
    #[inline]
    pub fn set_max_age(&mut self, value: Duration) {
        self.set_attribute(Attribute::MaxAge(value));
    }

    /// Sets the `Partitioned` flag of `self`.
    #[inline]
    pub fn set_partitioned(&mut self, value: bool) {
        self.set_attribute(Attribute::Partitioned(value));
    }

    /// Sets the `Path` of `self`.
    #[inline]
    pub fn set_path<P: Into<String>>(&mut self, path: P) {
        self.set_attribute(Attribute::Path(path.into()));
    }

    /// Sets the `Priority` of `self`.
    #[inline]
    pub fn set_priority(&mut self, value: Priority) {
        self.set_attribute(Attribute::Priority(value));
    }

    /// Sets the `SameSite` policy of `self`.
    #[inline]
    pub fn set_same_site(&mut self, value: SameSite) {
        self.set_attribute(Attribute::SameSite(value));
    }

    /// Sets the `Secure` flag of `self`.
    #[inline]
    pub fn set_secure(&mut self, value: bool) {
        self.set_attribute(Attribute::Secure(value));
    }

    /// Returns a cookie that, once written to a store, removes the cookie
    /// named `name`: no value and a `Max-Age` of zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Cookie;
    ///
    /// assert_eq!(Cookie::removal("cookie-1").to_string(), "cookie-1=;Max-Age=0");
    /// ```
    pub fn removal<N: Into<String>>(name: N) -> Cookie {
        Cookie::from_options(CookieOptions::new(name).max_age(Duration::ZERO))
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = value::encode(self.value());

        #[cfg(feature = "percent-encode")]
        write!(f, "{}={}",
            percent_encode(self.name().as_bytes(), USERINFO_ENCODE_SET),
            percent_encode(encoded.as_bytes(), USERINFO_ENCODE_SET))?;

        #[cfg(not(feature = "percent-encode"))]
        write!(f, "{}={}", self.name(), encoded)?;

        for attribute in self.attributes() {
            write!(f, ";{}", attribute)?;
        }

        Ok(())
    }
}

impl FromStr for Cookie {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Cookie, ParseError> {
        Cookie::parse(s)
    }
}
