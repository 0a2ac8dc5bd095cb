//! Range errors reported by the checked sequence operations.

use core::fmt;

/// The position handed to a checked operation lies outside the live range.
///
/// Returned by [`EagerVec::at`](crate::EagerVec::at),
/// [`at_mut`](crate::EagerVec::at_mut), [`insert`](crate::EagerVec::insert)
/// and [`erase`](crate::EagerVec::erase). The sequence is left untouched
/// whenever this error is produced.
///
/// # Examples
///
/// ```
/// # use eagervec::{eagervec, EagerVec, OutOfRange};
/// let vec: EagerVec<i32> = eagervec![1, 2, 3];
///
/// let err = vec.at(10).unwrap_err();
/// assert_eq!(err, OutOfRange { index: 10, len: 3 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    /// The offending index or position.
    pub index: usize,
    /// Number of live elements at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { index, len } = self;
        write!(f, "index {index} out of range for sequence of length {len}")
    }
}

impl core::error::Error for OutOfRange {}
