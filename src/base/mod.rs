//! Basics.
//!
//! This module provides the fundamental text handling for domain names.
//! Currently, this is the [name] module which deals with the labels of
//! domain names in their presentation format.
//!
//! The most important items are re-exported here for convenience.

pub use self::name::{
    common_suffix_count, count_labels, is_fqdn, is_subdomain, split_labels,
    split_offsets, to_fqdn,
};

pub mod name;
