//! Comparing names by their common suffix.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use tracing::trace;

use super::fqdn::to_fqdn;
use super::split::{count_labels, label_range, split_offsets};

//------------ common_suffix_count -------------------------------------------

/// Returns how many labels two names have in common starting from the right.
///
/// Both names are made fully qualified first. The labels are then compared
/// pairwise starting with the last one until the first pair that differs or
/// until one of the names runs out of labels.
///
/// Labels are compared as they appear in the text. Neither case nor escape
/// sequences are normalized, so `NL` differs from `nl` and `\097` differs
/// from `a`. Callers that want to ignore case need to fold both names
/// before.
///
/// The root name has no labels and thus has nothing in common with any
/// name, not even with itself.
///
/// ```
/// use domain_labels::base::name::common_suffix_count;
///
/// assert_eq!(common_suffix_count("www.miek.nl.", "miek.nl."), 2);
/// assert_eq!(common_suffix_count("www.miek.nl.", "www.bla.nl."), 1);
/// assert_eq!(common_suffix_count(".", "."), 0);
/// ```
pub fn common_suffix_count(left: &str, right: &str) -> usize {
    let left = to_fqdn(left);
    let right = to_fqdn(right);
    let (left, right) = (left.as_bytes(), right.as_bytes());
    let left_offsets = split_offsets(left);
    let right_offsets = split_offsets(right);

    let res = (0..left_offsets.len())
        .rev()
        .zip((0..right_offsets.len()).rev())
        .take_while(|&(left_idx, right_idx)| {
            left[label_range(left, &left_offsets, left_idx)]
                == right[label_range(right, &right_offsets, right_idx)]
        })
        .count();
    trace!(
        left = %left.escape_ascii(),
        right = %right.escape_ascii(),
        common = res,
        "compared name suffixes"
    );
    res
}

//------------ is_subdomain --------------------------------------------------

/// Returns whether `child` is at or below `parent` in the name tree.
///
/// This is the case if all labels of `parent` are the right-most labels of
/// `child`. Every name is a subdomain of itself and of the root name. As
/// with [`common_suffix_count`], labels are compared as they appear in the
/// text.
///
/// ```
/// use domain_labels::base::name::is_subdomain;
///
/// assert!(is_subdomain("miek.nl.", "www.miek.nl."));
/// assert!(!is_subdomain("www.miek.nl.", "miek.nl."));
/// assert!(is_subdomain(".", "nl."));
/// ```
pub fn is_subdomain(parent: &str, child: &str) -> bool {
    let parent_labels = count_labels(to_fqdn(parent).as_bytes());
    let res = common_suffix_count(parent, child) == parent_labels;
    trace!(parent, child, res, "checked subdomain");
    res
}

//============ Testing =======================================================
