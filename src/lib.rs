//! Escape-aware label handling for domain names.
//!
//! This crate provides the text-level building blocks that sit beneath
//! anything dealing with domain names in their presentation format: finding
//! label boundaries in the presence of escape sequences, splitting a name
//! into its labels, counting them, and comparing two names by the labels
//! they share at their end.
//!
//! In presentation format, labels are separated by dots and a backslash
//! removes the special meaning of the character that follows it. Thus
//! `a\.b.c.` consists of the two labels `a\.b` and `c`, whereas in
//! `a\\.b.` the two backslashes stand for one literal backslash and the
//! dot that follows them does separate two labels.
//!
//! All functionality lives in the [base] module; see [base::name] for the
//! details.
//!
//! # Reference of Feature Flags
//!
//! * `bytes`: Enables splitting the `Bytes` type from the
//!    [bytes](https://github.com/tokio-rs/bytes) crate into labels without
//!    copying.
#![cfg_attr(feature = "logging", doc = "* `logging`: Enables [logging].")]
#![cfg_attr(not(feature = "logging"), doc = "* `logging`: Enables logging.")]
//!   This provides a helper to set up a
//!   [tracing-subscriber](https://github.com/tokio-rs/tracing) based
//!   subscriber for the events emitted by this crate.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod base;

#[cfg(feature = "logging")]
pub mod logging;
