//! A cookie jar for holding the set of cookies read from a document.
//!
//! Cookies are keyed by name: adding a cookie whose name is already in the
//! jar replaces the old one in place, so a jar preserves the order in which
//! names were first seen.

use std::fmt;

use crate::Cookie;

/// A collection of cookies keyed by name.
///
/// # Example
///
/// ```rust
/// use docookie::{Cookie, CookieJar};
///
/// let mut jar = CookieJar::parse_list("a=1; b=two");
/// assert_eq!(jar.len(), 2);
///
/// jar.add(Cookie::new("a", "replaced"));
/// jar.remove("b");
/// assert_eq!(jar.to_string(), "a=replaced");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieJar {
    cookies: Vec<Cookie>,
}

impl CookieJar {
    /// Creates an empty cookie jar.
    pub fn new() -> CookieJar {
        CookieJar::default()
    }

    /// Parses every cookie in the `"; "`-joined list `list`. Entries that fail
    /// to parse are skipped. Later entries replace earlier entries of the same
    /// name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::CookieJar;
    ///
    /// let jar = CookieJar::parse_list("; cookiename=value;");
    /// assert_eq!(jar.len(), 1);
    /// assert!(jar.contains("cookiename"));
    /// ```
    pub fn parse_list(list: &str) -> CookieJar {
        let mut jar = CookieJar::new();
        for result in Cookie::split_parse(list) {
            match result {
                Ok(cookie) => {
                    jar.add(cookie);
                }
                Err(e) => tracing::debug!(error = %e, "skipping unparsable cookie"),
            }
        }

        jar
    }

    /// Returns a reference to the cookie named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|c| c.name() == name)
    }

    /// Returns `true` if the jar holds a cookie named `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Adds `cookie`, replacing and returning any cookie of the same name.
    pub fn add(&mut self, cookie: Cookie) -> Option<Cookie> {
        match self.cookies.iter_mut().find(|c| c.name() == cookie.name()) {
            Some(existing) => Some(std::mem::replace(existing, cookie)),
            None => {
                self.cookies.push(cookie);
                None
            }
        }
    }

    /// Removes and returns the cookie named `name`, if any.
    pub fn remove(&mut self, name: &str) -> Option<Cookie> {
        let i = self.cookies.iter().position(|c| c.name() == name)?;
        Some(self.cookies.remove(i))
    }

    /// The number of cookies in the jar.
    #[inline]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Returns `true` if the jar holds no cookies.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Returns an iterator over the cookies in the jar.
    pub fn iter(&self) -> std::slice::Iter<'_, Cookie> {
        self.cookies.iter()
    }
}

impl fmt::Display for CookieJar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cookie) in self.cookies.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{}", cookie)?;
        }

        Ok(())
    }
}

impl FromIterator<Cookie> for CookieJar {
    fn from_iter<I: IntoIterator<Item = Cookie>>(iter: I) -> Self {
        let mut jar = CookieJar::new();
        for cookie in iter {
            jar.add(cookie);
        }

        jar
    }
}

impl IntoIterator for CookieJar {
    type Item = Cookie;
    type IntoIter = std::vec::IntoIter<Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.into_iter()
    }
}

impl<'a> IntoIterator for &'a CookieJar {
    type Item = &'a Cookie;
    type IntoIter = std::slice::Iter<'a, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::{Cookie, CookieJar, Value};

    #[test]
    fn simple() {
        let mut c = CookieJar::new();

        c.add(Cookie::new("test", ""));
        c.add(Cookie::new("test2", ""));
        c.remove("test");

        assert!(c.get("test").is_none());
        assert!(c.get("test2").is_some());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn add_replaces_in_place() {
        let mut c = CookieJar::parse_list("a=1; b=2; c=3");
        let old = c.add(Cookie::new("b", "new"));

        assert_eq!(old, Some(Cookie::new("b", 2)));
        let names: Vec<_> = c.iter().map(Cookie::name).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(c.get("b").and_then(Cookie::value), Some(&Value::from("new")));
    }

    #[test]
    fn parse_list() {
        let jar = CookieJar::parse_list("; cookiename=value;");
        assert_eq!(jar.len(), 1);

        let jar = CookieJar::parse_list(r#"cookie-1={"test":"value"}; cookie-2=12345; =broken"#);
        assert_eq!(jar.len(), 2);
        assert_eq!(jar.get("cookie-2").and_then(Cookie::value), Some(&Value::from(12345)));

        let jar = CookieJar::parse_list("dup=1; dup=2");
        assert_eq!(jar.len(), 1);
        assert_eq!(jar.get("dup").and_then(Cookie::value), Some(&Value::from(2)));

        assert!(CookieJar::parse_list("").is_empty());
    }

    #[test]
    fn display_and_collect() {
        let jar: CookieJar = vec![Cookie::new("a", 1), Cookie::new("b", "x"), Cookie::new("a", 2)]
            .into_iter()
            .collect();

        assert_eq!(jar.to_string(), "a=2; b=x");
        assert_eq!((&jar).into_iter().count(), 2);
        assert_eq!(jar.into_iter().map(|c| c.name().to_string()).collect::<Vec<_>>(), ["a", "b"]);
    }
}
