//! Houses the `zip` and `unzip` functions.

use crate::error::{Error, Result};
use crate::sequence::Sequence;
use crate::tuple::Tuple;

/// Zips two equal-length sequences into one sequence of [`Tuple`]s,
/// pairing elements by position.
///
/// Both inputs must have the same, nonzero length: differing lengths
/// fail with [`Error::LengthMismatch`], and two empty inputs fail with
/// [`Error::EmptyInput`]. On failure no output sequence exists at all.
///
/// Each tuple is *prepended* to the output, so the output holds the
/// pairs in the reverse of their input order: the pair built from the
/// inputs' front elements ends up at the output's back. Unzipping the
/// result reverses again, restoring the original order — see
/// [`unzip`].
pub fn zip<A, B, SA, SB, Zipped>(firsts: &SA, seconds: &SB) -> Result<Zipped>
where
    A: Clone,
    B: Clone,
    SA: Sequence<A>,
    SB: Sequence<B>,
    Zipped: Sequence<Tuple<A, B>>,
{
    if firsts.len() != seconds.len() {
        return Err(Error::LengthMismatch { first: firsts.len(), second: seconds.len() });
    }
    if firsts.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut zipped = Zipped::default();
    for (first, second) in firsts.iter().zip(seconds.iter()) {
        zipped.push_front(Tuple::of(first.clone(), second.clone()));
    }
    Ok(zipped)
}

/// Unzips a sequence of [`Tuple`]s into two parallel sequences, the
/// first values in one and the second values in the other.
///
/// Every tuple must have both slots filled: the first incomplete tuple
/// aborts the whole call with [`Error::IncompleteElement`] carrying its
/// front-to-back position, and *neither* output is returned — values
/// already extracted are staged locally and discarded, never visible to
/// the caller. An empty input unzips successfully into two empty
/// sequences.
///
/// Extracted values are *prepended* to their outputs, reversing input
/// order just as [`zip`] does, so `unzip` of a freshly zipped sequence
/// hands back the original inputs in their original order.
pub fn unzip<A, B, Zipped, SA, SB>(zipped: &Zipped) -> Result<(SA, SB)>
where
    A: Clone,
    B: Clone,
    Zipped: Sequence<Tuple<A, B>>,
    SA: Sequence<A>,
    SB: Sequence<B>,
{
    let mut firsts = SA::default();
    let mut seconds = SB::default();
    for (index, tuple) in zipped.iter().enumerate() {
        let Ok((first, second)) = tuple.extract() else {
            return Err(Error::IncompleteElement { index });
        };
        firsts.push_front(first);
        seconds.push_front(second);
    }
    Ok((firsts, seconds))
}
