//! The error taxonomy shared by `Tuple`, `zip`, and `unzip`.
//!
//! Every condition here is recoverable: operations report failure as a
//! value and leave the structures they were called on unchanged, so
//! callers can retry, substitute a default, or abort a larger workflow.

use thiserror::Error;

/// A convenience alias: every fallible operation in this crate returns
/// `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a tuple or sequence operation can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A read was attempted on a slot that has never been set.
    #[error("slot is empty: no value has been set")]
    SlotEmpty,

    /// A setter was called on a slot that already holds a value.
    /// Filled slots are permanent; the stored value is never replaced.
    #[error("slot already holds a value")]
    SlotAlreadyFilled,

    /// `zip` was given sequences of differing length. Both lengths are
    /// carried so the caller can report which input was short.
    #[error("sequence lengths differ: first has {first} elements, second has {second}")]
    LengthMismatch {
        /// Length of the first input sequence.
        first: usize,
        /// Length of the second input sequence.
        second: usize,
    },

    /// `zip` was given two zero-length sequences.
    #[error("cannot zip empty sequences")]
    EmptyInput,

    /// `unzip` met a tuple with at least one unset slot. `index` is the
    /// tuple's front-to-back position in the input sequence.
    #[error("tuple at position {index} has an unset slot")]
    IncompleteElement {
        /// Front-to-back position of the offending tuple.
        index: usize,
    },
}
