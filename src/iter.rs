use crate::{Cookie, ParseError};

/// Iterator over the cookies of a `"; "`-joined cookie list, as read from
/// `Document.cookie`. Returned by [`Cookie::split_parse()`].
///
/// Blank entries are skipped. Each remaining entry is parsed with
/// [`Cookie::parse()`] and yielded as is, errors included.
#[derive(Debug, Clone)]
pub struct SplitCookies<'c> {
    input: Option<&'c str>,
}

impl<'c> SplitCookies<'c> {
    pub(crate) fn new(input: &'c str) -> Self {
        SplitCookies { input: Some(input) }
    }
}

impl<'c> Iterator for SplitCookies<'c> {
    type Item = Result<Cookie, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let input = self.input?;
            let (unparsed, rest) = match input.split_once("; ") {
                Some((unparsed, rest)) => (unparsed, Some(rest)),
                None => (input, None),
            };

            self.input = rest;
            if !unparsed.trim().is_empty() {
                return Some(Cookie::parse(unparsed));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Cookie, ParseError, Value};

    #[test]
    fn split() {
        let cookies: Vec<_> = Cookie::split_parse("hello=world; foo=bar;Path=/")
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies[0], Cookie::new("hello", "world"));
        assert_eq!(cookies[1].name(), "foo");
        assert_eq!(cookies[1].path(), Some("/"));
    }

    #[test]
    fn skips_blank_entries() {
        let names: Vec<_> = Cookie::split_parse("; cookiename=value;; ;  ; other=1")
            .map(|c| c.unwrap().name().to_string())
            .collect();

        assert_eq!(names, ["cookiename", "other"]);
        assert_eq!(Cookie::split_parse("").count(), 0);
        assert_eq!(Cookie::split_parse("; ").count(), 0);
    }

    #[test]
    fn yields_errors() {
        let results: Vec<_> = Cookie::split_parse("a=1; =2; b=3").collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().map(|c| c.value()), Ok(Some(&Value::from(1))));
        assert_eq!(results[1], Err(ParseError::EmptyName));
        assert!(results[2].is_ok());
    }
}
