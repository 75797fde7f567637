//! `Serialize` and `Deserialize` for [`Cookie`], as its cookie string.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::Cookie;

impl Serialize for Cookie {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(self)
    }
}

struct CookieVisitor;

impl<'de> Visitor<'de> for CookieVisitor {
    type Value = Cookie;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a cookie string")
    }

    fn visit_str<E: de::Error>(self, val: &str) -> Result<Self::Value, E> {
        Cookie::parse(val).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Cookie {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Cookie, D::Error> {
        de.deserialize_str(CookieVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};

    use crate::{Cookie, CookieOptions, Priority, SameSite};

    #[test]
    fn cookie_as_string() {
        let cookie = Cookie::from_options(CookieOptions::new("name").value("value").path("/"));
        assert_tokens(&cookie, &[Token::Str("name=value;Path=/")]);
        assert_de_tokens(&cookie, &[Token::String("name=value;Path=/")]);
    }

    #[test]
    fn cookie_errors() {
        assert_de_tokens_error::<Cookie>(&[Token::Str("")],
            "the cookie is missing a name/value pair");
        assert_de_tokens_error::<Cookie>(&[Token::Str("=value")],
            "the cookie's name is empty");
    }

    #[test]
    fn draft_enums() {
        assert_tokens(&SameSite::Lax, &[
            Token::UnitVariant { name: "SameSite", variant: "Lax" },
        ]);

        assert_tokens(&Priority::High, &[
            Token::UnitVariant { name: "Priority", variant: "High" },
        ]);
    }
}
