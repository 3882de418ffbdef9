//! The `zip` and `unzip` functions are the kernel of the crate. The
//! `tuple` module provides the pair type they produce and consume, the
//! `sequence` module hides container details behind the one abstraction
//! the kernel needs, and the `error` module names every way an
//! operation can fail.
//!
//! Current limitations:
//! * `zip` and `unzip` both accumulate by prepending, so each reverses
//!   the order of its input (and a zip-then-unzip round trip restores
//!   it). Whether the reversal is a contract worth keeping or an
//!   accident worth fixing is an open question; until it's settled,
//!   the reversal is documented and tested as-is.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod error;
pub mod sequence;
pub mod tuple;
pub mod zipper;

pub use crate::error::{Error, Result};
pub use crate::sequence::{SeqIter, Sequence};
pub use crate::tuple::Tuple;
pub use crate::zipper::{unzip, zip};
