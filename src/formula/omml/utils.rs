use memchr::memchr;
use std::borrow::Cow;

/// Resolve the body of an entity or character reference (`amp`, `#x3B1`).
///
/// Returns `None` for names outside the five predefined XML entities and for
/// malformed character references.
pub fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        },
    }
}

/// Replace entity and character references in raw XML text.
///
/// Unknown references are kept verbatim.
pub fn unescape_text(raw: &str) -> Cow<'_, str> {
    if memchr(b'&', raw.as_bytes()).is_none() {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        match tail.find(';') {
            Some(end) => match resolve_reference(&tail[..end]) {
                Some(ch) => {
                    out.push(ch);
                    rest = &tail[end + 1..];
                },
                None => {
                    out.push('&');
                    rest = tail;
                },
            },
            None => {
                out.push('&');
                rest = tail;
            },
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
