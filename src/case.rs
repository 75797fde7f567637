//! Conversion between wire attribute keys (`Max-Age`, `HttpOnly`) and the
//! internal camel-case keys (`maxAge`, `httpOnly`).

use std::borrow::Cow;

/// Converts a wire key to its internal, lower camel-case form.
///
/// Any run of characters that are not ASCII alphanumeric acts as a word
/// separator: the following character is upper-cased and the separator is
/// dropped. The first character of the result is always lower-cased.
///
/// # Example
///
/// ```rust
/// use docookie::case::to_internal_key;
///
/// assert_eq!(to_internal_key("Max-Age"), "maxAge");
/// assert_eq!(to_internal_key("HttpOnly"), "httpOnly");
/// assert_eq!(to_internal_key("same_site"), "sameSite");
/// ```
pub fn to_internal_key(wire: &str) -> String {
    let mut key = String::with_capacity(wire.len());
    let mut upper_next = false;
    for c in wire.trim().chars() {
        if !c.is_ascii_alphanumeric() {
            upper_next = !key.is_empty();
            continue;
        }

        if key.is_empty() {
            key.extend(c.to_lowercase());
        } else if upper_next {
            key.extend(c.to_uppercase());
        } else {
            key.push(c);
        }

        upper_next = false;
    }

    key
}

/// Converts an internal key to its wire form by upper-casing the first
/// character. `maxAge` is the one exception: its wire form is `Max-Age`.
///
/// # Example
///
/// ```rust
/// use docookie::case::to_wire_key;
///
/// assert_eq!(to_wire_key("domain"), "Domain");
/// assert_eq!(to_wire_key("sameSite"), "SameSite");
/// assert_eq!(to_wire_key("maxAge"), "Max-Age");
/// ```
pub fn to_wire_key(internal: &str) -> Cow<'_, str> {
    if internal == "maxAge" {
        return Cow::Borrowed("Max-Age");
    }

    let mut chars = internal.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            let mut wire: String = first.to_uppercase().collect();
            wire.push_str(chars.as_str());
            Cow::Owned(wire)
        }
        _ => Cow::Borrowed(internal),
    }
}
