//! Character reference decoding.

use std::borrow::Cow;

/// Named references recognized in text and attribute values.
const NAMED: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '\u{a9}'),
    ("reg", '\u{ae}'),
    ("ndash", '\u{2013}'),
    ("mdash", '\u{2014}'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("ldquo", '\u{201c}'),
    ("rdquo", '\u{201d}'),
    ("hellip", '\u{2026}'),
];

/// Longest reference body we try to resolve, e.g. `#x10FFFF`.
const MAX_REFERENCE_LEN: usize = 10;

/// Decode `&name;`, `&#NN;` and `&#xHH;` references.
///
/// Unknown or malformed references are left verbatim. Returns the input
/// unchanged (borrowed) when it contains no `&`.
pub fn decode(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let resolved = after
            .find(';')
            .filter(|&semi| semi > 0 && semi <= MAX_REFERENCE_LEN)
            .and_then(|semi| resolve(&after[..semi]).map(|ch| (ch, semi)));

        match resolved {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}

fn resolve(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == body)
        .map(|(_, ch)| *ch)
}
