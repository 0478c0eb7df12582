//! This module defines lazy, possibly infinite streams: lists whose head and tail are both memoized thunks.
//! Additionally, it declares modules with generators of streams.
//!
//! Transforming a stream traverses it no further than needed to know the first cell of the result.
//! Everything else is evaluated when the head or the tail of a cell is forced, and then only as much
//! of the upstream as that cell needs. Since every cell is built
//! from [`Lazy`]s, each head and each tail is computed at most once no matter how often, or through
//! how many clones, it is observed.

mod generators;

use crate::{Lazy, List};

use alloc::rc::Rc;
use core::fmt;
use core::mem;

/// [`Stream<T>`] defines lazy lists of type `T` which may be infinite.
#[derive(Default)]
pub enum Stream<'a, T: 'a> {
    /// The stream without any entries.
    #[default]
    Empty,
    /// Constructing a stream from a (lazy) first entry and a (lazy) stream of the remaining entries.
    /// Forcing one of the two does not force the other.
    Cons(Lazy<'a, T>, Lazy<'a, Stream<'a, T>>),
}

impl<'a, T: 'a> Stream<'a, T> {
    /// Create the empty stream.
    #[inline]
    pub const fn empty() -> Self {
        Stream::Empty
    }

    /// The same as [`Stream::Cons`].
    #[inline]
    pub fn cons(head: Lazy<'a, T>, tail: Lazy<'a, Self>) -> Self {
        Stream::Cons(head, tail)
    }

    /// Force the first entry of `self` if there is one.
    ///
    /// # Panics
    ///
    /// A panic may occur if the computation of the head panics.
    pub fn head(&self) -> Option<&T> {
        match self {
            Stream::Empty => None,
            Stream::Cons(head, _) => Some(head.value()),
        }
    }

    /// Force the remaining entries of `self` if `self` is not empty.
    ///
    /// # Panics
    ///
    /// A panic may occur if the computation of the tail panics.
    pub fn tail(&self) -> Option<Self> {
        match self {
            Stream::Empty => None,
            Stream::Cons(_, tail) => Some(tail.value().clone()),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Move the cells out of `self`, leaving the empty stream behind.
    fn unlink(&mut self) -> Self {
        mem::replace(self, Stream::Empty)
    }

    /// Iterate over the entries of `self`, forcing each tail only when the next entry is requested.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            next: Lazy::from_value(self.clone()),
        }
    }
}

impl<'a, T: 'a> Stream<'a, T> {
    /// Lazily apply `f` to every entry of `self`.
    /// - `f` is the closure to be applied.
    ///
    /// Nothing is forced by this function. `f` is applied to an entry when (and only the first
    /// time) the corresponding head of the result is forced.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::Stream;
    ///
    /// let squares = Stream::from(0).map(|n| n * n);
    /// assert_eq!(squares.drop_at_most(3).head(), Some(&9));
    /// ```
    pub fn map<U, F>(&self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: Fn(&T) -> U + 'a,
    {
        self.map_with(Rc::new(f))
    }

    fn map_with<U, F>(&self, f: Rc<F>) -> Stream<'a, U>
    where
        U: 'a,
        F: Fn(&T) -> U + 'a,
    {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Cons(head, tail) => {
                let g = Rc::clone(&f);
                Stream::Cons(
                    head.map(move |item| g(item)),
                    tail.map(move |rest| rest.map_with(f)),
                )
            }
        }
    }

    /// Lazily keep the entries of `self` which satisfy `p`.
    /// - `p` is the predicate serving as filter.
    ///
    /// To know whether the result is empty this function forces `self` up to (and including) the
    /// first entry satisfying `p`. The rest is filtered when the tail of the result is forced.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::Stream;
    ///
    /// let odds = Stream::from(0).filter(|n| n % 2 == 1);
    /// assert_eq!(odds.head(), Some(&1));
    /// ```
    pub fn filter<P>(&self, p: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.filter_with(Rc::new(p))
    }

    fn filter_with<P>(&self, p: Rc<P>) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        let mut stream = self.clone();
        loop {
            let rest = match &stream {
                Stream::Empty => return Stream::Empty,
                Stream::Cons(head, tail) => {
                    if p(head.value()) {
                        let p = Rc::clone(&p);
                        return Stream::Cons(
                            head.clone(),
                            tail.map(move |rest| rest.filter_with(p)),
                        );
                    }
                    tail.value().clone()
                }
            };
            stream = rest;
        }
    }

    /// Lazily replace every entry of `self` by the stream `f` yields for it and concatenate the
    /// results.
    /// - `f` is the closure to be applied.
    ///
    /// To know whether the result is empty this function forces `self` up to the first entry for
    /// which `f` yields a non-empty stream.
    pub fn flat_map<U, F>(&self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: Fn(&T) -> Stream<'a, U> + 'a,
    {
        self.flat_map_with(Rc::new(f))
    }

    fn flat_map_with<U, F>(&self, f: Rc<F>) -> Stream<'a, U>
    where
        U: 'a,
        F: Fn(&T) -> Stream<'a, U> + 'a,
    {
        let mut stream = self.clone();
        loop {
            let rest = match &stream {
                Stream::Empty => return Stream::Empty,
                Stream::Cons(head, tail) => {
                    let inner = f(head.value());
                    if !inner.is_empty() {
                        let (tail, f) = (tail.clone(), Rc::clone(&f));
                        let rest = Lazy::new(move || tail.value().flat_map_with(f));
                        return inner.append_lazy(rest);
                    }
                    tail.value().clone()
                }
            };
            stream = rest;
        }
    }

    /// Lazily append `other` to `self`. Nothing is forced by this function.
    pub fn append(&self, other: &Self) -> Self {
        self.append_lazy(Lazy::from_value(other.clone()))
    }

    /// Append a stream which is only computed once all of `self` has been traversed.
    fn append_lazy(&self, other: Lazy<'a, Self>) -> Self {
        match self {
            Stream::Empty => other.value().clone(),
            Stream::Cons(head, tail) => Stream::Cons(
                head.clone(),
                tail.map(move |rest| rest.append_lazy(other)),
            ),
        }
    }

    /// Lazily keep the longest prefix of `self` whose entries all satisfy `p`.
    /// - `p` is the predicate.
    ///
    /// Only the head of `self` is forced by this function.
    pub fn take_while<P>(&self, p: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.take_while_with(Rc::new(p))
    }

    fn take_while_with<P>(&self, p: Rc<P>) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        match self {
            Stream::Cons(head, tail) if p(head.value()) => Stream::Cons(
                head.clone(),
                tail.map(move |rest| rest.take_while_with(p)),
            ),
            _ => Stream::Empty,
        }
    }

    /// The same as [`take_while`](`Stream::take_while`) but expressed as a
    /// [`fold_right`](`Stream::fold_right`) which never forces its accumulator once `p` fails.
    pub fn take_while_via_fold_right<P>(&self, p: P) -> Self
    where
        T: Clone,
        P: Fn(&T) -> bool + 'a,
    {
        self.fold_right(Lazy::from_value(Stream::Empty), move |head, rest| {
            if p(head) {
                Stream::Cons(Lazy::from_value(head.clone()), rest)
            } else {
                Stream::Empty
            }
        })
    }

    /// Lazily keep at most the first `n` entries of `self`.
    ///
    /// Nothing is forced by this function and forcing the result never forces `self` beyond its
    /// `n`-th cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::{list, Stream};
    ///
    /// assert_eq!(Stream::from(0).take_at_most(3).to_list(), list![0, 1, 2]);
    /// ```
    pub fn take_at_most(&self, n: usize) -> Self {
        match self {
            Stream::Cons(head, tail) if n > 0 => {
                let rest = if n == 1 {
                    Lazy::from_value(Stream::Empty)
                } else {
                    tail.map(move |rest| rest.take_at_most(n - 1))
                };
                Stream::Cons(head.clone(), rest)
            }
            _ => Stream::Empty,
        }
    }

    /// Skip at most the first `n` entries of `self`, forcing exactly the tails skipped.
    /// If `self` has fewer than `n` entries the result is empty.
    pub fn drop_at_most(&self, n: usize) -> Self {
        let mut stream = self.clone();
        for _ in 0..n {
            match stream.tail() {
                Some(rest) => stream = rest,
                None => break,
            }
        }
        stream
    }

    /// Skip the entries at the front of `self` as long as they satisfy `p`.
    ///
    /// The function does not return if all of the (infinitely many) entries of `self` satisfy `p`.
    pub fn drop_while<P>(&self, mut p: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut stream = self.clone();
        loop {
            let rest = match &stream {
                Stream::Cons(head, tail) if p(head.value()) => tail.value().clone(),
                _ => break,
            };
            stream = rest;
        }
        stream
    }

    /// Check whether an entry of `self` satisfies `p`, forcing the entries one after another until
    /// one does.
    ///
    /// The function does not return if no entry of an infinite stream satisfies `p`.
    pub fn exists<P>(&self, mut p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut stream = self.clone();
        loop {
            let rest = match &stream {
                Stream::Empty => return false,
                Stream::Cons(head, tail) => {
                    if p(head.value()) {
                        return true;
                    }
                    tail.value().clone()
                }
            };
            stream = rest;
        }
    }

    /// The first entry of `self` satisfying `p` if there is one.
    ///
    /// The function does not return if no entry of an infinite stream satisfies `p`.
    pub fn find<P>(&self, p: P) -> Option<T>
    where
        T: Clone,
        P: Fn(&T) -> bool + 'a,
    {
        self.filter(p).head().cloned()
    }

    /// Force all of `self` and collect the entries into a [`List`].
    ///
    /// The function does not return if `self` is infinite.
    pub fn to_list(&self) -> List<T>
    where
        T: Clone,
    {
        self.iter()
            .fold(List::new(), |list, item| list.cons(item))
            .reverse()
    }

    /// Combine the entries of `self` from back to front.
    /// - `identity` is the (lazy) result for the empty stream.
    /// - `f` combines an entry with the (lazy) combination of all entries behind it.
    ///
    /// The accumulator passed to `f` is only computed if `f` forces it, so `f` can stop the fold
    /// early, even on an infinite stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::{Lazy, Stream};
    ///
    /// let any_above_ten = Stream::from(0).fold_right(Lazy::from_value(false), |n, rest| {
    ///     *n > 10 || *rest.value()
    /// });
    /// assert!(any_above_ten);
    /// ```
    pub fn fold_right<U, F>(&self, identity: Lazy<'a, U>, f: F) -> U
    where
        U: Clone + 'a,
        F: Fn(&T, Lazy<'a, U>) -> U + 'a,
    {
        self.fold_right_with(identity, Rc::new(f))
    }

    fn fold_right_with<U, F>(&self, identity: Lazy<'a, U>, f: Rc<F>) -> U
    where
        U: Clone + 'a,
        F: Fn(&T, Lazy<'a, U>) -> U + 'a,
    {
        match self {
            Stream::Empty => identity.value().clone(),
            Stream::Cons(head, tail) => {
                let (tail, g) = (tail.clone(), Rc::clone(&f));
                let rest = Lazy::new(move || tail.value().fold_right_with(identity, g));
                f(head.value(), rest)
            }
        }
    }
}

impl<'a, T: 'a> Clone for Stream<'a, T> {
    fn clone(&self) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Cons(head, tail) => Stream::Cons(head.clone(), tail.clone()),
        }
    }
}

/// Unlink forced cells one by one so that dropping a long stream does not recurse.
impl<'a, T: 'a> Drop for Stream<'a, T> {
    fn drop(&mut self) {
        let mut next = match self {
            Stream::Empty => return,
            Stream::Cons(_, tail) => tail.get_unique_mut().map(Stream::unlink),
        };
        while let Some(mut stream) = next {
            next = match &mut stream {
                Stream::Empty => None,
                Stream::Cons(_, tail) => tail.get_unique_mut().map(Stream::unlink),
            };
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Stream<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Empty => f.write_str("Empty"),
            Stream::Cons(head, tail) => f.debug_tuple("Cons").field(head).field(tail).finish(),
        }
    }
}

impl<'a, T: Clone + 'a> IntoIterator for &Stream<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`Iter`] walks a [`Stream`] from front to back, yielding copies of its entries.
pub struct Iter<'a, T: 'a> {
    /// the stream starting with the next entry to yield
    next: Lazy<'a, Stream<'a, T>>,
}

impl<'a, T: Clone + 'a> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = match self.next.value() {
            Stream::Empty => return None,
            Stream::Cons(head, tail) => (head.value().clone(), tail.clone()),
        };
        self.next = tail;
        Some(head)
    }
}
