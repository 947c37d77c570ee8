//! Labels of domain names in presentation format.
//!
//! Domain names are a sequence of *labels*. In their presentation format,
//! i.e., the way they are written in zonefiles or typed by users, the
//! labels are separated by dots. The labels are nominally arranged
//! backwards: the ‘most significant’ label is the last one. An *absolute*
//! or *fully qualified* name ends in a dot that stands for the empty root
//! label. The name consisting of only that dot is the *root name* and has
//! no labels of its own.
//!
//! Labels may contain dots and backslashes themselves if these are escaped
//! by a backslash. Because of this, splitting a name on every dot gives the
//! wrong result. The functions in this module take escaping into account.
//! They don’t decode escape sequences, though: labels are returned as they
//! appear in the text.
//!
//! The basic building block is [`next_label`] which finds the start of the
//! label following a given one. On top of it, [`split_offsets`],
//! [`split_labels`], [`labels`], and [`count_labels`] dissect a name while
//! [`common_suffix_count`] and [`is_subdomain`] compare two names label by
//! label from the right.
//!
//! Except for the comparison functions, everything expects the name to
//! already be fully qualified. Use [`to_fqdn`] once and pass its result on.
//!
//! ```
//! use domain_labels::base::name::{split_labels, to_fqdn};
//!
//! let name = to_fqdn("www.miek.nl");
//! assert_eq!(split_labels(&name), ["www", "miek", "nl"]);
//! ```

pub use self::boundary::{
    check_escapes, next_label, DanglingEscape, ESCAPE, SEPARATOR,
};
pub use self::cmp::{common_suffix_count, is_subdomain};
pub use self::fqdn::{is_fqdn, to_fqdn};
pub use self::split::{
    count_labels, labels, prev_label, split_label_octets, split_labels,
    split_offsets, Labels,
};

mod boundary;
mod cmp;
mod fqdn;
mod split;
