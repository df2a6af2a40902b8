// Value encoder: RFC 3986 percent-encoding, one character at a time

/// Characters that may pass through unescaped under the `+` and `#` operators.
///
/// `%` is a member, so pre-encoded triplets survive only when reserved
/// characters are allowed; otherwise `%` itself becomes `%25`.
const RESERVED: &str = "-._:/?#[]@!$%'()*+,;=";

pub fn is_reserved(ch: char) -> bool {
    RESERVED.contains(ch)
}

/// Percent-encode `value`.
///
/// Iterates Unicode scalar values; a non-ASCII character is encoded as its
/// UTF-8 bytes. Unreserved characters (`A-Z a-z 0-9 - . _ ~`) are never
/// escaped.
pub fn encode_value(value: &str, encode_reserved: bool) -> String {
    let mut encoded = String::with_capacity(value.len());
    let mut buf = [0u8; 4];

    for ch in value.chars() {
        if !encode_reserved && is_reserved(ch) {
            encoded.push(ch);
        } else {
            encoded.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }

    encoded
}
