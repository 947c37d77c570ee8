//! Finding label boundaries in presentation format.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use core::{cmp, fmt};

//------------ Characters ----------------------------------------------------

/// The character separating labels.
pub const SEPARATOR: u8 = b'.';

/// The character removing the special meaning of the one following it.
pub const ESCAPE: u8 = b'\\';

//------------ next_label ----------------------------------------------------

/// Returns the start of the label following the one starting at `offset`.
///
/// The function scans `text` from `offset` for the next separator that
/// isn’t escaped and returns the position right after it together with
/// `false`. If there is no such separator, the label starting at `offset`
/// is the last one and the function returns the length of `text` together
/// with `true`.
///
/// The final character of `text` is never looked at. It is expected to be
/// the separator terminating the last label of an absolute name.
///
/// A backslash escapes the character following it. A run of backslashes
/// toggles whether the next character is escaped once per backslash, so
/// `a\\.b.` contains the two labels `a\\` and `b` whereas `a\.b.` contains
/// only one.
///
/// The function doesn’t allocate and never fails. An `offset` beyond the
/// end of `text` is simply returned as the end.
pub fn next_label<S: AsRef<[u8]> + ?Sized>(
    text: &S,
    offset: usize,
) -> (usize, bool) {
    let text = text.as_ref();
    let last = text.len().saturating_sub(1);
    let mut quote = false;
    if let Some(label) = text.get(offset..last) {
        for (i, &ch) in label.iter().enumerate() {
            match ch {
                ESCAPE => quote = !quote,
                SEPARATOR if quote => quote = false,
                SEPARATOR => return (offset + i + 1, false),
                _ => quote = false,
            }
        }
    }
    (cmp::max(text.len(), offset), true)
}

//------------ check_escapes -------------------------------------------------

/// Checks that `text` doesn’t end in an escape that escapes nothing.
///
/// None of the label functions care about this. They treat a dangling
/// backslash as part of the last label. Callers that want to reject such
/// text need to check themselves.
pub fn check_escapes<S: AsRef<[u8]> + ?Sized>(
    text: &S,
) -> Result<(), DanglingEscape> {
    let text = text.as_ref();
    if trailing_escapes(text) % 2 == 1 {
        Err(DanglingEscape(text.len() - 1))
    } else {
        Ok(())
    }
}

/// Returns the number of escape characters at the very end of `text`.
pub(super) fn trailing_escapes(text: &[u8]) -> usize {
    text.iter().rev().take_while(|&&ch| ch == ESCAPE).count()
}

//============ Error Types ===================================================

//------------ DanglingEscape ------------------------------------------------

/// The text ended with an escape character that didn’t escape anything.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DanglingEscape(usize);

impl DanglingEscape {
    /// Returns the position of the offending escape character.
    pub fn position(self) -> usize {
        self.0
    }
}

//--- Display and Error

impl fmt::Display for DanglingEscape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "dangling escape character at position {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DanglingEscape {}

//============ Testing =======================================================
