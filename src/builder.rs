use time::{Duration, OffsetDateTime};

use crate::{Attribute, Cookie, Priority, SameSite, Value};

/// The unparsed attributes of a cookie, as handed to
/// [`Cookie::from_options()`] or [`Document::set()`](crate::Document::set()).
///
/// Every attribute is optional and only makes it into the resulting
/// [`Cookie`] if it was set. "Set" means set, not truthy: `http_only(false)`
/// and `max_age(Duration::ZERO)` are retained as such.
///
/// ```rust
/// use docookie::{Cookie, CookieOptions, Priority};
/// use docookie::time::Duration;
///
/// let cookie = Cookie::from_options(
///     CookieOptions::new("name")
///         .value("value")
///         .path("/")
///         .priority(Priority::High)
///         .max_age(Duration::minutes(30))
///         .http_only(false),
/// );
///
/// assert_eq!(cookie.to_string(), "name=value;Max-Age=1800;Path=/;Priority=High;HttpOnly=false");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CookieOptions {
    name: String,
    value: Option<Value>,
    domain: Option<String>,
    expires: Option<Expiry>,
    http_only: Option<bool>,
    max_age: Option<Duration>,
    partitioned: Option<bool>,
    path: Option<String>,
    priority: Option<Priority>,
    same_site: Option<SameSite>,
    secure: Option<bool>,
}

impl CookieOptions {
    /// Creates options for a cookie named `name` with no other attribute.
    pub fn new<N: Into<String>>(name: N) -> Self {
        CookieOptions { name: name.into(), ..Default::default() }
    }

    /// Sets the value.
    #[inline]
    pub fn value<V: Into<Value>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the `Domain`. An empty domain is ignored.
    pub fn domain<D: Into<String>>(mut self, domain: D) -> Self {
        let domain: String = domain.into();
        self.domain = Some(domain).filter(|d| !d.is_empty());
        self
    }

    /// Sets the `Expires` date. See [`Expiry`] for conversions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::{Cookie, CookieOptions, Expiry};
    /// use docookie::time::macros::datetime;
    ///
    /// let expected = datetime!(2015-10-21 07:28:00 UTC);
    ///
    /// let c = Cookie::from_options(CookieOptions::new("a").expires(expected));
    /// assert_eq!(c.expires(), Some(expected));
    ///
    /// let c = Cookie::from_options(CookieOptions::new("a").expires("Wed, 21 Oct 2015 07:28:00 GMT"));
    /// assert_eq!(c.expires(), Some(expected));
    ///
    /// let c = Cookie::from_options(CookieOptions::new("a").expires(Expiry::millis(1445412480000)));
    /// assert_eq!(c.expires(), Some(expected));
    /// ```
    pub fn expires<E: Into<Expiry>>(mut self, when: E) -> Self {
        self.expires = Some(when.into());
        self
    }

    /// Sets the `HttpOnly` flag.
    #[inline]
    pub fn http_only(mut self, value: bool) -> Self {
        self.http_only = Some(value);
        self
    }

    /// Sets the `Max-Age`. It is written as a possibly fractional number of
    /// seconds.
    #[inline]
    pub fn max_age(mut self, value: Duration) -> Self {
        self.max_age = Some(value);
        self
    }

    /// Sets the `Partitioned` flag.
    #[inline]
    pub fn partitioned(mut self, value: bool) -> Self {
        self.partitioned = Some(value);
        self
    }

    /// Sets the `Path`. An empty path is ignored.
    pub fn path<P: Into<String>>(mut self, path: P) -> Self {
        let path: String = path.into();
        self.path = Some(path).filter(|p| !p.is_empty());
        self
    }

    /// Sets the `Priority`.
    #[inline]
    pub fn priority(mut self, value: Priority) -> Self {
        self.priority = Some(value);
        self
    }

    /// Sets the `SameSite` policy.
    #[inline]
    pub fn same_site(mut self, value: SameSite) -> Self {
        self.same_site = Some(value);
        self
    }

    /// Sets the `Secure` flag.
    #[inline]
    pub fn secure(mut self, value: bool) -> Self {
        self.secure = Some(value);
        self
    }

    /// The name of the cookie these options describe.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds the [`Cookie`] these options describe.
    ///
    /// Attributes are laid out in a fixed order: expires, max-age, path,
    /// priority, domain, http-only, secure, same-site, partitioned. An
    /// expiry that doesn't resolve to a date is dropped.
    pub fn into_cookie(self) -> Cookie {
        let mut cookie = Cookie::named(self.name);
        cookie.value = self.value;

        let attributes = [
            self.expires.and_then(|e| e.resolve()).map(Attribute::Expires),
            self.max_age.map(Attribute::MaxAge),
            self.path.map(Attribute::Path),
            self.priority.map(Attribute::Priority),
            self.domain.map(Attribute::Domain),
            self.http_only.map(Attribute::HttpOnly),
            self.secure.map(Attribute::Secure),
            self.same_site.map(Attribute::SameSite),
            self.partitioned.map(Attribute::Partitioned),
        ];

        for attribute in attributes.into_iter().flatten() {
            cookie.set_attribute(attribute);
        }

        cookie
    }
}

impl From<CookieOptions> for Cookie {
    #[inline]
    fn from(options: CookieOptions) -> Self {
        options.into_cookie()
    }
}

/// The ways an `Expires` date can be given to [`CookieOptions::expires()`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expiry {
    /// An exact date-time.
    DateTime(OffsetDateTime),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// A date string in any format accepted when parsing cookies.
    Text(String),
}

impl Expiry {
    /// An expiry `millis` milliseconds after the Unix epoch.
    #[inline]
    pub fn millis(millis: i64) -> Self {
        Expiry::Millis(millis)
    }

    /// Resolves `self` to a date-time, or `None` if it names no valid one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::Expiry;
    ///
    /// assert!(Expiry::from("2015-10-21T07:28:00Z").resolve().is_some());
    /// assert!(Expiry::from("Invalid Date").resolve().is_none());
    /// assert!(Expiry::millis(i64::MAX).resolve().is_none());
    /// ```
    pub fn resolve(&self) -> Option<OffsetDateTime> {
        match self {
            Expiry::DateTime(time) => Some(*time),
            Expiry::Millis(millis) => {
                let nanos = i128::from(*millis) * 1_000_000;
                OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
            }
            Expiry::Text(text) => crate::parse::parse_date(text),
        }
    }
}

impl From<OffsetDateTime> for Expiry {
    fn from(time: OffsetDateTime) -> Self {
        Expiry::DateTime(time)
    }
}

impl From<&str> for Expiry {
    fn from(text: &str) -> Self {
        Expiry::Text(text.to_string())
    }
}

impl From<String> for Expiry {
    fn from(text: String) -> Self {
        Expiry::Text(text)
    }
}

/// Either unparsed [`CookieOptions`] or an already parsed [`Cookie`].
///
/// Operations that accept `impl Into<CookieInput>` parse options first and
/// pass parsed cookies through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum CookieInput {
    /// Options still to be parsed.
    Options(CookieOptions),
    /// A parsed cookie.
    Parsed(Cookie),
}

impl CookieInput {
    /// Returns the parsed cookie, parsing options if necessary.
    pub fn into_cookie(self) -> Cookie {
        match self {
            CookieInput::Options(options) => options.into_cookie(),
            CookieInput::Parsed(cookie) => cookie,
        }
    }
}

impl From<CookieOptions> for CookieInput {
    fn from(options: CookieOptions) -> Self {
        CookieInput::Options(options)
    }
}

impl From<Cookie> for CookieInput {
    fn from(cookie: Cookie) -> Self {
        CookieInput::Parsed(cookie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn full_options() -> CookieOptions {
        CookieOptions::new("cookiename")
            .value(Value::Json(serde_json::json!({ "test": "value" })))
            .path("/specific-path")
            .priority(Priority::High)
            .expires(datetime!(2030-01-01 12:30:00 UTC))
            .domain("example.com")
            .secure(true)
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(1_700_000_000_000))
            .partitioned(true)
    }

    #[test]
    fn sets_each_attribute() {
        let cookie = Cookie::from_options(full_options());
        assert_eq!(cookie.name(), "cookiename");
        assert_eq!(cookie.value(), Some(&Value::Json(serde_json::json!({ "test": "value" }))));
        assert_eq!(cookie.path(), Some("/specific-path"));
        assert_eq!(cookie.priority(), Some(Priority::High));
        assert_eq!(cookie.expires(), Some(datetime!(2030-01-01 12:30:00 UTC)));
        assert_eq!(cookie.domain(), Some("example.com"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(1_700_000_000_000)));
        assert_eq!(cookie.partitioned(), Some(true));
    }

    #[test]
    fn fixed_attribute_order() {
        let cookie = Cookie::from_options(full_options());
        let keys: Vec<_> = cookie.attributes().map(|a| a.key()).collect();
        assert_eq!(keys, [
            "expires", "maxAge", "path", "priority", "domain",
            "httpOnly", "secure", "sameSite", "partitioned",
        ]);
    }

    #[test]
    fn unset_attributes_are_omitted() {
        let cookie = Cookie::from_options(CookieOptions::new("cookiename"));
        assert_eq!(cookie.name(), "cookiename");
        assert_eq!(cookie.value(), None);
        assert_eq!(cookie.attributes().count(), 0);

        let cookie = Cookie::from_options(CookieOptions::new("c").path("").domain(""));
        assert_eq!(cookie.attributes().count(), 0);
    }

    #[test]
    fn falsy_values_are_retained() {
        let cookie = Cookie::from_options(CookieOptions::new("c")
            .max_age(Duration::ZERO)
            .http_only(false)
            .secure(false)
            .partitioned(false));

        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.http_only(), Some(false));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.partitioned(), Some(false));
    }

    #[test]
    fn expiry_conversions() {
        let expected = datetime!(2015-10-21 07:28:00 UTC);
        assert_eq!(Expiry::from(expected).resolve(), Some(expected));
        assert_eq!(Expiry::millis(1_445_412_480_000).resolve(), Some(expected));
        assert_eq!(Expiry::from("Wed, 21 Oct 2015 07:28:00 GMT").resolve(), Some(expected));
        assert_eq!(Expiry::from(String::from("garbage")).resolve(), None);

        let cookie = Cookie::from_options(CookieOptions::new("c").expires("garbage"));
        assert_eq!(cookie.expires(), None);
        assert_eq!(cookie.attributes().count(), 0);
    }

    #[test]
    fn parsed_cookies_pass_through() {
        let once = Cookie::from_options(full_options());
        let twice = Cookie::from_options(once.clone());
        assert_eq!(once, twice);

        let input = CookieInput::from(once.clone());
        assert_eq!(input.into_cookie(), once);
    }
}
