//! The `Sequence` abstraction that `zip` and `unzip` operate on.
//!
//! The zipper functions never need random access: they only walk their
//! inputs front to back and grow their outputs at one end. `Sequence`
//! codifies exactly that, so any list-like container with a defined
//! order can be zipped. Impls are provided for the two standard
//! containers that support cheap appends at both ends.

use std::collections::{LinkedList, VecDeque};

/// The `SeqIter` type is how a [`Sequence`] lends out its elements:
/// `s.iter()` returns a boxed iterator over `&T`, front to back.
pub type SeqIter<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// An ordered, growable-at-both-ends container of `T`.
///
/// The `Default` bound lets the zipper functions construct fresh output
/// sequences of whatever container type the caller asked for.
pub trait Sequence<T>: Default {
    /// Appends `item` before the current front element.
    fn push_front(&mut self, item: T);

    /// Appends `item` after the current back element.
    fn push_back(&mut self, item: T);

    /// The number of elements held.
    fn len(&self) -> usize;

    /// True when the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the elements in front-to-back order.
    fn iter(&self) -> SeqIter<'_, T>;
}

impl<T> Sequence<T> for VecDeque<T> {
    fn push_front(&mut self, item: T) {
        VecDeque::push_front(self, item);
    }

    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> SeqIter<'_, T> {
        Box::new(VecDeque::iter(self))
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn push_front(&mut self, item: T) {
        LinkedList::push_front(self, item);
    }

    fn push_back(&mut self, item: T) {
        LinkedList::push_back(self, item);
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter(&self) -> SeqIter<'_, T> {
        Box::new(LinkedList::iter(self))
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    // Pushing through the trait must agree with the containers' own
    // notion of order, for both impls.
    fn front_back_front<S: Sequence<u8>>() -> Vec<u8> {
        let mut seq = S::default();
        seq.push_front(2);
        seq.push_back(3);
        seq.push_front(1);
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        seq.iter().copied().collect()
    }

    #[test]
    fn vecdeque_preserves_front_to_back_order() {
        assert_eq!(front_back_front::<VecDeque<u8>>(), vec![1, 2, 3]);
    }

    #[test]
    fn linked_list_preserves_front_to_back_order() {
        assert_eq!(front_back_front::<LinkedList<u8>>(), vec![1, 2, 3]);
    }

    #[test]
    fn a_default_sequence_is_empty() {
        let seq = VecDeque::<u8>::default();
        assert!(Sequence::is_empty(&seq));
        assert_eq!(Sequence::len(&seq), 0);
        assert_eq!(Sequence::iter(&seq).count(), 0);
    }
}
