//! This module provides generators of (possibly infinite) streams.
//!
//! A generator returns a single cell whose tail is a deferred call of the generator itself, so
//! constructing an infinite stream takes constant time and space.

use super::Stream;
use crate::Lazy;

use alloc::rc::Rc;

impl<'a, T: 'a> Stream<'a, T> {
    /// Create the infinite stream `seed`, `f(seed)`, `f(f(seed))`, ...
    /// - `seed` is the first entry.
    /// - `f` computes an entry from its predecessor.
    ///
    /// `f` is applied when the tail of a cell is forced, once per cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::{list, Stream};
    ///
    /// let powers = Stream::iterate(1, |n| n * 2);
    /// assert_eq!(powers.take_at_most(5).to_list(), list![1, 2, 4, 8, 16]);
    /// ```
    pub fn iterate<F>(seed: T, f: F) -> Self
    where
        F: Fn(&T) -> T + 'a,
    {
        Self::iterate_with(seed, Rc::new(f))
    }

    fn iterate_with<F>(seed: T, f: Rc<F>) -> Self
    where
        F: Fn(&T) -> T + 'a,
    {
        let head = Lazy::from_value(seed);
        let predecessor = head.clone();
        Stream::Cons(
            head,
            Lazy::new(move || Self::iterate_with(f(predecessor.value()), f)),
        )
    }

    /// Create the infinite stream of the results of calling `factory` over and over again.
    /// - `factory` computes an entry.
    ///
    /// Every cell has a head of its own: `factory` is called once for every head forced.
    pub fn repeat<F>(factory: F) -> Self
    where
        F: Fn() -> T + 'a,
    {
        Self::repeat_with(Rc::new(factory))
    }

    fn repeat_with<F>(factory: Rc<F>) -> Self
    where
        F: Fn() -> T + 'a,
    {
        let produce = Rc::clone(&factory);
        Stream::Cons(
            Lazy::new(move || produce()),
            Lazy::new(move || Self::repeat_with(factory)),
        )
    }

    /// Create a stream from a seed and a step function.
    /// - `seed` is the initial state.
    /// - `step` either yields an entry together with the next state or [`None`] to end the stream.
    ///
    /// `step` is called on `seed` right away to know whether the stream is empty; on the later
    /// states it is called when the tail of the previous cell is forced.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::{list, Stream};
    ///
    /// let countdown = Stream::unfold(3, |n| if n > 0 { Some((n, n - 1)) } else { None });
    /// assert_eq!(countdown.to_list(), list![3, 2, 1]);
    /// ```
    pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
        S: 'a,
        F: Fn(S) -> Option<(T, S)> + 'a,
    {
        Self::unfold_with(seed, Rc::new(step))
    }

    fn unfold_with<S, F>(seed: S, step: Rc<F>) -> Self
    where
        S: 'a,
        F: Fn(S) -> Option<(T, S)> + 'a,
    {
        match step(seed) {
            None => Stream::Empty,
            Some((head, seed)) => Stream::Cons(
                Lazy::from_value(head),
                Lazy::new(move || Self::unfold_with(seed, step)),
            ),
        }
    }
}

impl<'a> Stream<'a, i64> {
    /// Create the ascending stream of integers starting with `start`.
    /// The stream ends with [`i64::MAX`] instead of overflowing.
    pub fn from(start: i64) -> Self {
        Stream::unfold(Some(start), |n: Option<i64>| {
            n.map(|n| (n, n.checked_add(1)))
        })
    }
}

impl<'a> Stream<'a, u64> {
    /// Create the stream of Fibonacci numbers `1, 1, 2, 3, 5, ...`.
    /// The stream ends with the largest Fibonacci number a [`u64`] can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::Stream;
    ///
    /// let fibs = Stream::fibs().take_at_most(10).to_list();
    /// assert_eq!(fibs.to_string(), "1, 1, 2, 3, 5, 8, 13, 21, 34, 55");
    /// ```
    pub fn fibs() -> Self {
        Stream::unfold(Some((1, Some(1))), |pair: Option<(u64, Option<u64>)>| {
            pair.map(|(previous, current)| {
                let next = current.map(|current| (current, previous.checked_add(current)));
                (previous, next)
            })
        })
    }
}
