//! Splitting names into labels and counting them.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.
//!
//! All functions here work on the text exactly as given. They expect the
//! name to be fully qualified, i.e., to end in an unescaped separator, and
//! treat its last character as the terminator of the last label. Use
//! [`to_fqdn`][super::to_fqdn] once before and then hand the result to
//! every function that needs it: offsets are only meaningful for the very
//! text they were taken from.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops;

use octseq::Octets;

use super::boundary::{next_label, SEPARATOR};
use super::fqdn::is_fqdn;

//------------ split_offsets -------------------------------------------------

/// Returns the positions where the labels of `name` start.
///
/// The first element, if any, is always 0. The last element is the start
/// of the last label, not the position of the terminating separator. The
/// root name has no labels and results in an empty vec.
///
/// ```
/// use domain_labels::base::name::split_offsets;
///
/// assert_eq!(split_offsets("www.miek.nl."), [0, 4, 9]);
/// assert!(split_offsets(".").is_empty());
/// ```
pub fn split_offsets<S: AsRef<[u8]> + ?Sized>(name: &S) -> Vec<usize> {
    let name = name.as_ref();
    let mut res = Vec::new();
    if is_root(name) {
        return res;
    }
    res.push(0);
    let mut offset = 0;
    loop {
        let (next, end) = next_label(name, offset);
        if end {
            return res;
        }
        res.push(next);
        offset = next;
    }
}

//------------ split_labels --------------------------------------------------

/// Returns the labels of `name`.
///
/// The labels are returned in their presentation format, escape sequences
/// and all, without the separators. The root name results in an empty vec.
///
/// ```
/// use domain_labels::base::name::split_labels;
///
/// assert_eq!(split_labels("www.miek.nl."), ["www", "miek", "nl"]);
/// assert_eq!(split_labels(r"a\.b.c."), [r"a\.b", "c"]);
/// ```
pub fn split_labels(name: &str) -> Vec<&str> {
    labels(name).collect()
}

/// Returns the labels of `octets` as ranges of the sequence.
///
/// This splits exactly like [`split_labels`] but keeps the labels in the
/// octets type they came from. For shareable sequences such as `Bytes`, this
/// doesn’t copy the label content.
pub fn split_label_octets<Octs: Octets + ?Sized>(
    octets: &Octs,
) -> Vec<Octs::Range<'_>> {
    let name = octets.as_ref();
    let offsets = split_offsets(name);
    (0..offsets.len())
        .map(|idx| octets.range(label_range(name, &offsets, idx)))
        .collect()
}

/// Returns the range of the label with the given index.
///
/// `offsets` must have been taken from `name` and `idx` must be a valid
/// index into it. The range excludes the separator ending the label.
pub(super) fn label_range(
    name: &[u8],
    offsets: &[usize],
    idx: usize,
) -> ops::Range<usize> {
    let start = offsets[idx];
    match offsets.get(idx + 1) {
        Some(&next) => start..next - 1,
        None => start..last_label_end(name),
    }
}

/// Returns where the content of the last label ends.
fn last_label_end(name: &[u8]) -> usize {
    if is_fqdn(name) {
        name.len() - 1
    } else {
        name.len()
    }
}

/// Returns whether the name has no labels at all.
///
/// Besides the root name itself, this is true for the empty string which is
/// the root name before being made absolute.
fn is_root(name: &[u8]) -> bool {
    name.is_empty() || name == [SEPARATOR]
}

//------------ count_labels --------------------------------------------------

/// Returns the number of labels in `name`.
///
/// The result is the same as the length of [`split_offsets`] but the
/// function doesn’t allocate.
///
/// ```
/// use domain_labels::base::name::count_labels;
///
/// assert_eq!(count_labels("www.miek.nl."), 3);
/// assert_eq!(count_labels("."), 0);
/// ```
pub fn count_labels<S: AsRef<[u8]> + ?Sized>(name: &S) -> usize {
    let name = name.as_ref();
    if is_root(name) {
        return 0;
    }
    let mut res = 0;
    let mut offset = 0;
    loop {
        let (next, end) = next_label(name, offset);
        res += 1;
        if end {
            return res;
        }
        offset = next;
    }
}

//------------ prev_label ----------------------------------------------------

/// Returns the start of the label `n` labels from the end of `name`.
///
/// For `n` of zero, this is the length of `name`. For `n` up to the number
/// of labels, it is the offset of the `n`th label counted from the right.
/// Asking for more labels than there are returns `(0, true)`, the `true`
/// signalling that the start of the name has been overshot.
///
/// ```
/// use domain_labels::base::name::prev_label;
///
/// assert_eq!(prev_label("www.miek.nl.", 1), (9, false));
/// assert_eq!(prev_label("www.miek.nl.", 3), (0, false));
/// assert_eq!(prev_label("www.miek.nl.", 4), (0, true));
/// ```
pub fn prev_label<S: AsRef<[u8]> + ?Sized>(
    name: &S,
    n: usize,
) -> (usize, bool) {
    let name = name.as_ref();
    if n == 0 {
        return (name.len(), false);
    }
    let offsets = split_offsets(name);
    match offsets.len().checked_sub(n).and_then(|idx| offsets.get(idx)) {
        Some(&start) => (start, false),
        None => (0, true),
    }
}

//------------ labels and Labels ---------------------------------------------

/// Returns an iterator over the labels of `name`.
///
/// The iterator produces the same labels as [`split_labels`] but doesn’t
/// allocate.
pub fn labels(name: &str) -> Labels<'_> {
    Labels::new(name)
}

/// An iterator over the labels of a name in presentation format.
///
/// The iterator scans for the next label boundary each time it is advanced.
/// Labels are returned escape sequences and all, but without their
/// terminating separator.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    /// The name we iterate over.
    name: &'a str,

    /// The start of the next label or `None` if we are done.
    start: Option<usize>,
}

impl<'a> Labels<'a> {
    fn new(name: &'a str) -> Self {
        Labels {
            name,
            start: if is_root(name.as_bytes()) { None } else { Some(0) },
        }
    }

    /// Returns the part of the name not yet iterated over.
    pub fn remaining(&self) -> &'a str {
        match self.start {
            Some(start) => &self.name[start..],
            None => "",
        }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.start?;
        let (next, end) = next_label(self.name, start);
        if end {
            self.start = None;
            Some(&self.name[start..last_label_end(self.name.as_bytes())])
        } else {
            self.start = Some(next);
            Some(&self.name[start..next - 1])
        }
    }
}

impl<'a> FusedIterator for Labels<'a> {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offsets() {
        assert_eq!(split_offsets("www.miek.nl."), [0, 4, 9]);
        assert_eq!(split_offsets("nl."), [0]);
        assert_eq!(split_offsets(".."), [0, 1]);
        assert_eq!(split_offsets(r"a\.b.c."), [0, 5]);
        assert_eq!(split_offsets(r"a\\.b."), [0, 4]);
        assert_eq!(split_offsets(&b"www.miek.nl."[..]), [0, 4, 9]);
    }

    #[test]
    fn offsets_root() {
        assert!(split_offsets(".").is_empty());
        assert!(split_offsets("").is_empty());
    }

    #[test]
    fn offsets_relative() {
        // The last character is taken as the terminator and never looked at.
        assert_eq!(split_offsets("www.miek.nl"), [0, 4, 9]);
        assert_eq!(split_offsets("nl"), [0]);
    }

    #[test]
    fn labels_split() {
        assert_eq!(split_labels("www.miek.nl."), ["www", "miek", "nl"]);
        assert_eq!(split_labels("nl."), ["nl"]);
        assert_eq!(split_labels(r"a\.b.c."), [r"a\.b", "c"]);
        assert_eq!(split_labels(r"a\\.b."), [r"a\\", "b"]);
        assert_eq!(split_labels(".."), ["", ""]);
        assert!(split_labels(".").is_empty());
        assert!(split_labels("").is_empty());
    }

    #[test]
    fn labels_split_relative() {
        assert_eq!(split_labels("www.miek.nl"), ["www", "miek", "nl"]);
        assert_eq!(split_labels("nl"), ["nl"]);
        assert_eq!(split_labels(r"nl\."), [r"nl\."]);
    }

    #[test]
    fn labels_iter() {
        let mut iter = labels("www.miek.nl.");
        assert_eq!(iter.remaining(), "www.miek.nl.");
        assert_eq!(iter.next(), Some("www"));
        assert_eq!(iter.remaining(), "miek.nl.");
        assert_eq!(iter.next(), Some("miek"));
        assert_eq!(iter.next(), Some("nl"));
        assert_eq!(iter.remaining(), "");
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        assert_eq!(labels(".").next(), None);
        assert_eq!(labels("miek.nl.").count(), count_labels("miek.nl."));
    }

    #[test]
    fn labels_unicode() {
        assert_eq!(split_labels("bücher.example."), ["bücher", "example"]);
        assert_eq!(split_offsets("bücher.example."), [0, 8]);
    }

    #[test]
    fn label_octets() {
        let name = b"www.miek.nl.".to_vec();
        let res = split_label_octets(&name);
        assert_eq!(res, [&b"www"[..], &b"miek"[..], &b"nl"[..]]);
        assert!(split_label_octets(&b"."[..]).is_empty());
    }

    #[test]
    #[cfg(feature = "bytes")]
    fn label_octets_bytes() {
        use bytes::Bytes;

        let name = Bytes::from_static(br"a\.b.c.");
        let res = split_label_octets(&name);
        assert_eq!(
            res,
            [Bytes::from_static(br"a\.b"), Bytes::from_static(b"c")]
        );
    }

    #[test]
    fn count() {
        assert_eq!(count_labels("www.miek.nl."), 3);
        assert_eq!(count_labels("nl."), 1);
        assert_eq!(count_labels(r"a\.b.c."), 2);
        assert_eq!(count_labels(r"a\\.b."), 2);
        assert_eq!(count_labels("."), 0);
        assert_eq!(count_labels(""), 0);
    }

    #[test]
    fn count_matches_offsets() {
        for name in [
            ".",
            "",
            "..",
            "nl.",
            "www.miek.nl.",
            r"a\.b.c.",
            r"a\\.b.",
            r"a\\\.b.",
            r"\",
            "relative.name",
        ] {
            let count = count_labels(name);
            assert_eq!(count, split_offsets(name).len(), "{}", name);
            assert_eq!(count, split_labels(name).len(), "{}", name);
        }
    }

    #[test]
    fn prev() {
        let name = "www.miek.nl.";
        assert_eq!(prev_label(name, 0), (12, false));
        assert_eq!(prev_label(name, 1), (9, false));
        assert_eq!(prev_label(name, 2), (4, false));
        assert_eq!(prev_label(name, 3), (0, false));
        assert_eq!(prev_label(name, 4), (0, true));
        assert_eq!(prev_label(".", 0), (1, false));
        assert_eq!(prev_label(".", 1), (0, true));
        assert_eq!(prev_label(r"a\.b.c.", 2), (0, false));
    }
}
