use std::error::Error;
use std::fmt;

use crate::{Cookie, CookieInput, CookieJar};

/// Enum corresponding to a failed write to a [`CookieStore`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum StoreError {
    /// There is no cookie store in the current environment.
    Unavailable,
    /// The store refused the cookie string.
    Rejected,
}

impl StoreError {
    /// Returns a description of this error as a string
    pub fn as_str(&self) -> &'static str {
        match *self {
            StoreError::Unavailable => "no cookie store is available",
            StoreError::Rejected => "the cookie store rejected the cookie",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Error for StoreError {}

/// The host's cookie store: a single string property holding every cookie of
/// the current origin, like `Document.cookie`.
///
/// Reading returns the `"; "`-joined list of current cookies. Writing a single
/// `name=value;Key=Value` string adds or replaces that one cookie, leaving the
/// others untouched.
pub trait CookieStore {
    /// Returns the current cookie list, or `None` if there is no store.
    fn read(&self) -> Option<String>;

    /// Adds or replaces the cookie described by the cookie string `cookie`.
    fn write(&mut self, cookie: &str) -> Result<(), StoreError>;
}

impl<S: CookieStore + ?Sized> CookieStore for &mut S {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&mut self, cookie: &str) -> Result<(), StoreError> {
        (**self).write(cookie)
    }
}

/// A [`CookieStore`] for environments without one. Reads are empty and every
/// write fails with [`StoreError::Unavailable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detached;

impl CookieStore for Detached {
    fn read(&self) -> Option<String> {
        None
    }

    fn write(&mut self, _: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// An in-memory [`CookieStore`].
///
/// Each written string is kept verbatim, keyed by the name of the cookie it
/// describes, and replaces an earlier string of the same name in place.
/// Reading joins the kept strings with `"; "`. Attributes are stored, not
/// enforced: a cookie written with `Max-Age=0` stays readable.
///
/// # Example
///
/// ```rust
/// use docookie::{CookieStore, MemoryStore};
///
/// let mut store = MemoryStore::from_list("a=1; b=2");
/// store.write("a=3;Path=/").unwrap();
/// assert_eq!(store.read().as_deref(), Some("a=3;Path=/; b=2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: Vec<(String, String)>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Creates a store holding every entry of the `"; "`-joined cookie list
    /// `list`. Entries without a name are skipped.
    pub fn from_list(list: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        for entry in list.split("; ") {
            if let Err(e) = store.write(entry) {
                tracing::debug!(entry, error = %e, "skipping cookie list entry");
            }
        }

        store
    }

    /// The number of cookies held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no cookies.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CookieStore for MemoryStore {
    fn read(&self) -> Option<String> {
        let strings: Vec<&str> = self.entries.iter().map(|(_, s)| s.as_str()).collect();
        Some(strings.join("; "))
    }

    fn write(&mut self, cookie: &str) -> Result<(), StoreError> {
        let name = Cookie::parse(cookie).map_err(|_| StoreError::Rejected)?.name;
        let cookie = cookie.trim().to_string();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = cookie,
            None => self.entries.push((name, cookie)),
        }

        Ok(())
    }
}

/// A [`CookieStore`] backed by the browser's `document.cookie`.
#[cfg(feature = "web")]
#[cfg_attr(all(nightly, doc), doc(cfg(feature = "web")))]
#[derive(Debug, Clone)]
pub struct HtmlDocumentStore {
    document: web_sys::HtmlDocument,
}

#[cfg(feature = "web")]
impl HtmlDocumentStore {
    /// Returns the store of the current window's document, or
    /// [`StoreError::Unavailable`] outside of a browser.
    pub fn new() -> Result<HtmlDocumentStore, StoreError> {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .map(|document| HtmlDocumentStore { document })
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "web")]
impl CookieStore for HtmlDocumentStore {
    fn read(&self) -> Option<String> {
        self.document.cookie().ok()
    }

    fn write(&mut self, cookie: &str) -> Result<(), StoreError> {
        self.document.set_cookie(cookie).map_err(|_| StoreError::Rejected)
    }
}

/// Reads and writes cookies through a [`CookieStore`].
///
/// # Example
///
/// ```rust
/// use docookie::{CookieOptions, Document, MemoryStore};
///
/// let mut document = Document::new(MemoryStore::new());
/// document.set(CookieOptions::new("session").value("abc").path("/")).unwrap();
///
/// let cookie = document.get("session").unwrap();
/// assert_eq!(cookie.path(), Some("/"));
///
/// document.delete("session").unwrap();
/// assert_eq!(document.get("session").and_then(|c| c.max_age()).map(|a| a.whole_seconds()), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document<S> {
    store: S,
}

impl<S: CookieStore> Document<S> {
    /// Creates a document over `store`.
    pub fn new(store: S) -> Self {
        Document { store }
    }

    /// Returns every cookie in the store. A missing store yields an empty
    /// jar, and entries that fail to parse are skipped.
    pub fn get_all(&self) -> CookieJar {
        match self.store.read() {
            Some(list) => CookieJar::parse_list(&list),
            None => CookieJar::new(),
        }
    }

    /// Returns the cookie named `name`, if the store holds one.
    pub fn get(&self, name: &str) -> Option<Cookie> {
        self.get_all().remove(name)
    }

    /// Writes `input` to the store, building it first if it is unparsed
    /// options, and returns the written cookie.
    ///
    /// Fails with [`StoreError::Unavailable`] when there is no store.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docookie::{CookieOptions, Detached, Document, StoreError};
    ///
    /// let mut document = Document::new(Detached);
    /// assert_eq!(document.set(CookieOptions::new("name")), Err(StoreError::Unavailable));
    /// ```
    pub fn set<I: Into<CookieInput>>(&mut self, input: I) -> Result<Cookie, StoreError> {
        let cookie = Cookie::from_options(input);
        let string = cookie.to_string();
        match self.store.write(&string) {
            Ok(()) => {
                tracing::debug!(cookie = %string, "wrote cookie");
                Ok(cookie)
            }
            Err(e) => {
                tracing::warn!(name = cookie.name(), error = %e, "failed to write cookie");
                Err(e)
            }
        }
    }

    /// Removes the cookie named `name` by writing it with a `Max-Age` of zero.
    #[inline]
    pub fn delete(&mut self, name: &str) -> Result<Cookie, StoreError> {
        self.set(Cookie::removal(name))
    }

    /// Returns a reference to the underlying store.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store.
    #[inline]
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use crate::{Cookie, CookieOptions, CookieStore, Detached, Document, MemoryStore, StoreError};
    use crate::Value;

    fn document() -> Document<MemoryStore> {
        let list = r#"cookie-1={"test":"value"}; cookie-2=12345"#;
        Document::new(MemoryStore::from_list(list))
    }

    #[test]
    fn get() {
        let document = document();
        let cookie = document.get("cookie-1").unwrap();
        let value = cookie.value().and_then(Value::as_json).unwrap();
        assert_eq!(value["test"], "value");

        assert_eq!(document.get("cookie-2").unwrap().value(), Some(&Value::from(12345)));
        assert!(document.get("unexisting-cookie").is_none());
    }

    #[test]
    fn get_all() {
        assert_eq!(document().get_all().len(), 2);
        assert!(Document::new(Detached).get_all().is_empty());
        assert!(Document::new(MemoryStore::new()).get_all().is_empty());
    }

    #[test]
    fn set() {
        let mut document = document();
        let cookie = document.set(CookieOptions::new("testcookie")).unwrap();
        assert_eq!(cookie, Cookie::named("testcookie"));
        assert!(document.get_all().contains("testcookie"));

        document.set(CookieOptions::new("testcookie").path("/path")).unwrap();
        assert_eq!(document.get("testcookie").unwrap().path(), Some("/path"));
        assert_eq!(document.get_all().len(), 3);

        let parsed = Cookie::parse("parsed=1;Secure").unwrap();
        assert_eq!(document.set(parsed.clone()), Ok(parsed));
        assert_eq!(document.get("parsed").unwrap().secure(), Some(true));
    }

    #[test]
    fn delete() {
        let mut document = document();
        let removal = document.delete("cookie-1").unwrap();
        assert_eq!(removal.max_age(), Some(Duration::ZERO));
        assert_eq!(removal.value(), None);

        let cookie = document.get("cookie-1").unwrap();
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(document.store().read().as_deref(), Some("cookie-1=;Max-Age=0; cookie-2=12345"));
    }

    #[test]
    fn detached() {
        let mut document = Document::new(Detached);
        assert_eq!(document.set(CookieOptions::new("name")), Err(StoreError::Unavailable));
        assert_eq!(document.delete("name"), Err(StoreError::Unavailable));
        assert!(document.get("name").is_none());
    }

    #[test]
    fn memory_store() {
        let mut store = MemoryStore::from_list("; a=1;Path=/; =bad; b=2");
        assert_eq!(store.len(), 2);
        assert_eq!(store.write(""), Err(StoreError::Rejected));
        assert_eq!(store.write("=x"), Err(StoreError::Rejected));

        store.write(" a=3 ").unwrap();
        assert_eq!(store.read().as_deref(), Some("a=3; b=2"));

        Document::new(&mut store).set(Cookie::new("c", 4)).unwrap();
        assert_eq!(store.len(), 3);
        assert!(MemoryStore::new().is_empty());
    }
}
