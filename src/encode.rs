//! Query-component percent-encoding.
//!
//! Share links must match what browsers produce with `encodeURIComponent`:
//! every UTF-8 byte is escaped as `%XX` (uppercase hex) except ASCII
//! alphanumerics and `- _ . ! ~ * ' ( )`. A space becomes `%20`, never `+`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped by [`encode_component`]: everything except alphanumerics and
/// the URI "mark" characters.
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `input` for use as a single URL query component.
///
/// - `"Hello World"` → `"Hello%20World"`
/// - `"https://a.b/c"` → `"https%3A%2F%2Fa.b%2Fc"`
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}
