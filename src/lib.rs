//! fpstream provides the building blocks of functional data pipelines: memoized lazy values, persistent singly linked lists and lazy, possibly infinite streams.
//!
//! ## Design
//!
//! Everything here is immutable and shares structure: 'modifying' a collection means building a new one which reuses (parts of) the old one.
//! The three data types build on one another:
//! - A [`Lazy<T>`] defers a computation of a `T` and runs it at most once, no matter how many clones of it are forced.
//! - A [`List<T>`] is either empty or an entry followed by another list. Its operations are strict and never recurse, so lists of any length can be folded, reversed and dropped.
//! - A [`Stream<T>`] is either empty or a lazy entry followed by a lazy stream. Transforming a stream evaluates (almost) nothing up front and forcing a cell of the result only evaluates what that cell needs.
//!
//! The following graphic illustrates what forcing does to a stream `from(0).map(f).filter(p)` (a `?` marks a cell which has not been computed yet):
//!
//! <pre>
//! from(0):      0----1----2----?
//!               |    |    |
//!               | f  | f  | f
//!               v    v    v
//! map(f):       f0---f1---f2---?
//!               |    |    |
//!               | p  | p  | p
//!               v    x    v
//! filter(p):    f0--------f2---?
//! </pre>
//!
//! Forcing the second entry of the filtered stream applies `f` and `p` to the entries `1` and `2` alternately and memoizes all of the results on the way.
//!
//! ## Usage
//!
//! Lists are built with [`List::of`], with [`List::cons`] or with the [`list!`]-macro and then destructed with [`head`](`List::head`) and [`tail`](`List::tail`) or consumed by one of the many methods folding over them.
//! The [`combinators`]-module additionally offers functions combining lists with optional values and pairs.
//!
//! Streams are built from [`Stream::Cons`]/[`cons`](`Stream::cons`) and [`Lazy`]s or by the generators of the [`streams`]-module.
//! To observe them you can destruct them with [`head`](`Stream::head`) and [`tail`](`Stream::tail`), iterate over them, or cut them down with [`take_at_most`](`Stream::take_at_most`) and collect them into a [`List`] with [`to_list`](`Stream::to_list`).
//!
//! # Examples
//!
//! The classic example of demand-driven programming is a sieve on an infinite stream of numbers: only as many primes are computed as are asked for.
//!
//! ```
//! use fpstream::{list, Stream};
//!
//! fn sieve<'a>(candidates: Stream<'a, i64>) -> Stream<'a, i64> {
//!     match candidates.head() {
//!         None => Stream::empty(),
//!         Some(&prime) => {
//!             let rest = candidates.clone();
//!             Stream::cons(
//!                 fpstream::Lazy::from_value(prime),
//!                 fpstream::Lazy::new(move || {
//!                     sieve(rest.tail().unwrap_or_default().filter(move |n| n % prime != 0))
//!                 }),
//!             )
//!         }
//!     }
//! }
//!
//! let primes = sieve(Stream::from(2));
//!
//! assert_eq!(primes.take_at_most(6).to_list(), list![2, 3, 5, 7, 11, 13]);
//! ```
//!
//! Lists share their tails, so prepending to a list leaves the original untouched:
//!
//! ```
//! use fpstream::list;
//!
//! let xs = list![2, 3];
//! let ys = xs.cons(1);
//!
//! assert_eq!(ys, list![1, 2, 3]);
//! assert!(ys.tail().unwrap().ptr_eq(&xs));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod combinators;

pub mod lazy;

pub mod list;

pub mod streams;

pub use lazy::Lazy;
pub use list::List;
pub use streams::Stream;

/// Assert that the head of a stream equals a value.
#[cfg(test)]
#[macro_export]
macro_rules! assert_head_eq {
    ($stream:expr, $x:expr) => {
        assert_eq!($stream.head(), Some(&$x));
    };
}

/// Assert that a stream starts with the entries of an array, forcing its tails only in between
/// two entries.
#[cfg(test)]
#[macro_export]
macro_rules! assert_starts_with {
    ($stream:expr, [$($x:expr),* $(,)?]) => {
        let mut stream = $stream.clone();
        for (i, x) in [$($x),*].into_iter().enumerate() {
            if i > 0 {
                stream = stream.tail().expect("stream ended early");
            }
            assert_eq!(stream.head(), Some(&x));
        }
    };
}
