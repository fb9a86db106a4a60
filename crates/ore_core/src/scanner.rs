//! Marker and pattern search over a [`ByteBuffer`].
//!
//! All offsets returned here are relative to the buffer passed in.

use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::reader::ByteBuffer;

// Six ASCII digits terminated by NUL: the catalog code of a traded item.
static ITEM_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)([0-9]{6})\x00").expect("item code pattern is valid"));

static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)([0-9]+\.[0-9]+\.[0-9]+)").expect("version pattern is valid")
});

static NUL_BOUNDED_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)\x00([A-Za-z_]{3,30})\x00").expect("token pattern is valid")
});

/// First occurrence of `pattern` at or after `from`.
pub fn find_first(buf: &ByteBuffer<'_>, pattern: &[u8], from: usize) -> Option<usize> {
    if pattern.is_empty() || from >= buf.len() {
        return None;
    }
    buf.as_bytes()[from..]
        .windows(pattern.len())
        .position(|candidate| candidate == pattern)
        .map(|pos| pos + from)
}

/// Every occurrence of `pattern` that lies wholly inside
/// `window_start..window_start + window_len`, overlapping matches included.
pub fn find_all_within_window(
    buf: &ByteBuffer<'_>,
    pattern: &[u8],
    window_start: usize,
    window_len: usize,
) -> Vec<usize> {
    let window = buf.window(window_start, window_len);
    let offset = window.base() - buf.base();

    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(found) = find_first(&window, pattern, pos) {
        out.push(found + offset);
        pos = found + 1;
    }
    out
}

pub fn contains(buf: &ByteBuffer<'_>, pattern: &[u8]) -> bool {
    find_first(buf, pattern, 0).is_some()
}

/// First six-digit item code followed by NUL, with its offset.
pub fn find_item_code(buf: &ByteBuffer<'_>) -> Option<(usize, String)> {
    capture_ascii(&ITEM_CODE, buf)
}

/// First dotted `major.minor.patch` version string.
pub fn find_version(buf: &ByteBuffer<'_>) -> Option<(usize, String)> {
    capture_ascii(&VERSION, buf)
}

/// First run of 3 to 30 letters or underscores with a NUL on each side.
pub fn find_nul_bounded_token(buf: &ByteBuffer<'_>) -> Option<(usize, String)> {
    capture_ascii(&NUL_BOUNDED_TOKEN, buf)
}

fn capture_ascii(re: &Regex, buf: &ByteBuffer<'_>) -> Option<(usize, String)> {
    let group = re.captures(buf.as_bytes())?.get(1)?;
    // Every pattern above only admits ASCII bytes.
    let text = String::from_utf8_lossy(group.as_bytes()).into_owned();
    Some((group.start(), text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_first_honours_start_offset() {
        let buf = ByteBuffer::new(b"abcabcabc");
        assert_eq!(find_first(&buf, b"abc", 0), Some(0));
        assert_eq!(find_first(&buf, b"abc", 1), Some(3));
        assert_eq!(find_first(&buf, b"abc", 7), None);
        assert_eq!(find_first(&buf, b"", 0), None);
        assert_eq!(find_first(&buf, b"abc", 99), None);
    }

    #[test]
    fn find_all_includes_overlapping_matches() {
        let buf = ByteBuffer::new(b"xaaaax");
        assert_eq!(find_all_within_window(&buf, b"aa", 0, 6), vec![1, 2, 3]);
    }

    #[test]
    fn find_all_ignores_matches_crossing_the_window_edge() {
        let buf = ByteBuffer::new(b"..ab..ab..ab");
        assert_eq!(find_all_within_window(&buf, b"ab", 0, 12), vec![2, 6, 10]);
        assert_eq!(find_all_within_window(&buf, b"ab", 3, 4), Vec::<usize>::new());
        assert_eq!(find_all_within_window(&buf, b"ab", 3, 5), vec![6]);
    }

    #[test]
    fn item_code_requires_six_digits_and_nul() {
        let buf = ByteBuffer::new(b"\x0712345\x00\x07300001\x00");
        assert_eq!(find_item_code(&buf), Some((8, "300001".to_string())));

        let buf = ByteBuffer::new(b"1234567\x00");
        assert_eq!(find_item_code(&buf), Some((1, "234567".to_string())));

        let buf = ByteBuffer::new(b"300001 ");
        assert_eq!(find_item_code(&buf), None);
    }

    #[test]
    fn version_pattern_needs_three_components() {
        let buf = ByteBuffer::new(b"++UE4+Release-4.27\x00game 0.9.14\x00");
        assert_eq!(find_version(&buf).map(|(_, v)| v), Some("0.9.14".to_string()));
    }

    #[test]
    fn token_must_be_bounded_by_nul() {
        let buf = ByteBuffer::new(b"erty\x00\x0e\x00\x00\x00\x0a\x00\x00\x00Equipment\x00");
        assert_eq!(
            find_nul_bounded_token(&buf).map(|(_, t)| t),
            Some("Equipment".to_string())
        );

        let buf = ByteBuffer::new(b"\x00ab\x00\x00Equip ment\x00");
        assert_eq!(find_nul_bounded_token(&buf), None);
    }
}
