//! Absolute names in presentation format.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use alloc::borrow::Cow;
use alloc::string::String;

use tracing::trace;

use super::boundary::{trailing_escapes, ESCAPE, SEPARATOR};

//------------ is_fqdn -------------------------------------------------------

/// Returns whether `text` is a fully qualified domain name.
///
/// This is the case if it ends in a separator that isn’t escaped, i.e., one
/// that is preceded by an even number of backslashes.
pub fn is_fqdn<S: AsRef<[u8]> + ?Sized>(text: &S) -> bool {
    match text.as_ref().split_last() {
        Some((&SEPARATOR, head)) => trailing_escapes(head) % 2 == 0,
        _ => false,
    }
}

//------------ to_fqdn -------------------------------------------------------

/// Returns the fully qualified form of `text`.
///
/// If `text` already is fully qualified, it is returned as is. Otherwise a
/// copy with a separator appended is returned. The empty string becomes the
/// root name.
///
/// If `text` ends in an escape character that doesn’t escape anything, that
/// character would escape the appended separator. In this case, it is
/// turned into a literal backslash first. This way, the result is always
/// fully qualified and `to_fqdn(&to_fqdn(x)) == to_fqdn(x)`.
pub fn to_fqdn(text: &str) -> Cow<'_, str> {
    if is_fqdn(text) {
        return Cow::Borrowed(text);
    }
    let mut res = String::with_capacity(text.len() + 2);
    res.push_str(text);
    if trailing_escapes(text.as_bytes()) % 2 == 1 {
        trace!(name = text, "escaping dangling escape character");
        res.push(char::from(ESCAPE));
    }
    res.push(char::from(SEPARATOR));
    Cow::Owned(res)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn is_fqdn_plain() {
        assert!(is_fqdn("."));
        assert!(is_fqdn("www.miek.nl."));
        assert!(is_fqdn(".."));
        assert!(!is_fqdn(""));
        assert!(!is_fqdn("www.miek.nl"));
    }

    #[test]
    fn is_fqdn_escaped() {
        assert!(!is_fqdn(r"www.miek\."));
        assert!(is_fqdn(r"www.miek\\."));
        assert!(!is_fqdn(r"www.miek\\\."));
        assert!(is_fqdn(r"\\\\."));
    }

    #[test]
    fn to_fqdn_borrows() {
        assert!(matches!(to_fqdn("miek.nl."), Cow::Borrowed("miek.nl.")));
        assert!(matches!(to_fqdn("."), Cow::Borrowed(".")));
    }

    #[test]
    fn to_fqdn_appends() {
        assert_eq!(to_fqdn("miek.nl"), "miek.nl.");
        assert_eq!(to_fqdn(""), ".");
        assert_eq!(to_fqdn(r"miek\."), r"miek\..");
        assert_eq!(to_fqdn(r"miek\\"), r"miek\\.");
    }

    #[test]
    fn to_fqdn_dangling_escape() {
        assert_eq!(to_fqdn(r"miek\"), r"miek\\.");
        assert_eq!(to_fqdn(r"\"), r"\\.");
    }

    #[test]
    fn to_fqdn_idempotent() {
        for name in ["", ".", "nl", "nl.", r"a\", r"a\.", r"a\\", r"a\\\"] {
            let once = to_fqdn(name);
            assert!(is_fqdn(&*once), "{:?}", name);
            assert_eq!(to_fqdn(&once), once);
        }
    }
}
