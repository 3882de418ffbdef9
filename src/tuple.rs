//! Provides the `Tuple` pair type and its internal `Slot` holder.

use std::fmt;

use crate::error::{Error, Result};

/// A `Slot` holds either nothing or one owned value, and can be filled
/// at most once: the only transition is `Empty → Filled`, and a filled
/// slot never changes or empties again. Reads clone the held value out
/// rather than exposing a reference to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Slot<T>(Option<T>);

impl<T: Clone> Slot<T> {
    /// A slot with no value. Fillable exactly once.
    pub(crate) fn empty() -> Self {
        Slot(None)
    }

    /// A slot born holding `value`. No setter will ever succeed on it.
    pub(crate) fn filled(value: T) -> Self {
        Slot(Some(value))
    }

    pub(crate) fn is_filled(&self) -> bool {
        self.0.is_some()
    }

    /// Clones the held value out, or reports `SlotEmpty`.
    pub(crate) fn get(&self) -> Result<T> {
        match &self.0 {
            Some(value) => Ok(value.clone()),
            None => Err(Error::SlotEmpty),
        }
    }

    /// The one permitted transition. Fails with `SlotAlreadyFilled` on
    /// a filled slot, leaving the stored value untouched.
    pub(crate) fn fill(&mut self, value: T) -> Result<()> {
        if self.0.is_some() {
            return Err(Error::SlotAlreadyFilled);
        }
        self.0 = Some(value);
        Ok(())
    }
}

/// A pair of two independently typed [`Slot`]s.
///
/// A `Tuple` exclusively owns whatever its slots hold: cloning a tuple
/// deep-copies both values (and preserves which slots are empty), and
/// every read returns a clone, never a reference into the tuple. Each
/// slot can be set at most once, so a tuple built with [`Tuple::of`] is
/// permanently bound to its values, while one built with
/// [`Tuple::empty`] can be filled later through the setters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tuple<A, B> {
    first: Slot<A>,
    second: Slot<B>,
}

impl<A: Clone, B: Clone> Tuple<A, B> {
    /// A tuple with both slots empty. Use the setters to fill it.
    #[must_use]
    pub fn empty() -> Self {
        Tuple { first: Slot::empty(), second: Slot::empty() }
    }

    /// A tuple with both slots filled. Cannot fail, and the values can
    /// never be replaced afterwards.
    #[must_use]
    pub fn of(first: A, second: B) -> Self {
        Tuple { first: Slot::filled(first), second: Slot::filled(second) }
    }

    /// Clones out the first value, or `SlotEmpty` if it was never set.
    pub fn first(&self) -> Result<A> {
        self.first.get()
    }

    /// Clones out the second value, or `SlotEmpty` if it was never set.
    pub fn second(&self) -> Result<B> {
        self.second.get()
    }

    /// Clones out both values. Succeeds only when *both* slots are
    /// filled; a half-filled tuple yields `SlotEmpty` and no partial
    /// result. To read what a half-filled tuple does hold, use
    /// [`Tuple::first`] and [`Tuple::second`].
    pub fn extract(&self) -> Result<(A, B)> {
        if !(self.first.is_filled() && self.second.is_filled()) {
            return Err(Error::SlotEmpty);
        }
        Ok((self.first.get()?, self.second.get()?))
    }

    /// Fills the first slot, or fails with `SlotAlreadyFilled` leaving
    /// the tuple unchanged.
    pub fn set_first(&mut self, first: A) -> Result<()> {
        self.first.fill(first)
    }

    /// Fills the second slot, or fails with `SlotAlreadyFilled` leaving
    /// the tuple unchanged.
    pub fn set_second(&mut self, second: B) -> Result<()> {
        self.second.fill(second)
    }

    /// Fills both slots at once. Succeeds only on a fully empty tuple;
    /// if either slot is already filled, fails with `SlotAlreadyFilled`
    /// and fills neither.
    pub fn set_both(&mut self, first: A, second: B) -> Result<()> {
        if self.first.is_filled() || self.second.is_filled() {
            return Err(Error::SlotAlreadyFilled);
        }
        self.first.fill(first)?;
        self.second.fill(second)
    }

    /// Renders both values on one line, or `SlotEmpty` if either slot
    /// has no value yet.
    pub fn display(&self) -> Result<String>
    where
        A: fmt::Display,
        B: fmt::Display,
    {
        let (first, second) = self.extract()?;
        Ok(format!("({first}, {second})"))
    }
}
