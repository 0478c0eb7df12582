//! This module provides memoized thunks: deferred computations which are run at most once.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

/// [`Thunk<T>`] types the boxed computations a [`Lazy`] owns until it is forced.
type Thunk<'a, T> = Box<dyn FnOnce() -> T + 'a>;

/// The memo slot: `pending` while the thunk is still stored, `resolved` once it ran.
type Slot<'a, T> = once_cell::unsync::Lazy<T, Thunk<'a, T>>;

/// [`Lazy<T>`] defines deferred computations of type `T` whose result is memoized.
///
/// Cloning a [`Lazy`] is cheap and shares the memoized result: whichever clone is forced first runs
/// the computation and every other clone observes that value afterwards.
/// Two instances constructed independently never share anything, even if their computations are
/// equal.
///
/// If the computation panics the instance is poisoned: the computation is not run a second time
/// and every further read panics as well.
pub struct Lazy<'a, T>(Rc<Slot<'a, T>>);

impl<'a, T> Lazy<'a, T> {
    /// Defer the computation `f` without running it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::Lazy;
    ///
    /// let answer = Lazy::new(|| 6 * 7);
    /// assert!(!answer.is_evaluated());
    /// assert_eq!(*answer.value(), 42);
    /// ```
    #[inline]
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        let thunk: Thunk<'a, T> = Box::new(f);
        Lazy(Rc::new(Slot::new(thunk)))
    }

    /// Wrap an already known value. Forcing it runs no user code.
    #[inline]
    pub fn from_value(value: T) -> Self
    where
        T: 'a,
    {
        Self::new(move || value)
    }

    /// Force `self`, running the computation if this is the first observation, and return a
    /// reference to the memoized result.
    ///
    /// # Panics
    ///
    /// A panic occurs if
    /// - the computation panics.
    /// - a previous forcing of `self` (or of one of its clones) panicked.
    #[inline]
    pub fn value(&self) -> &T {
        Slot::force(&self.0)
    }

    /// Peek at the memoized result without forcing anything.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        Slot::get(&self.0)
    }

    /// Whether the computation already ran successfully.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.get().is_some()
    }

    /// Whether `self` and `other` share one memo slot, that is, one is a clone of the other.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Borrow the memoized result mutably if `self` is the last handle on an evaluated slot.
    pub(crate) fn get_unique_mut(&mut self) -> Option<&mut T> {
        Rc::get_mut(&mut self.0).and_then(Slot::get_mut)
    }
}

impl<'a, T: 'a> Lazy<'a, T> {
    /// Defer applying `f` to the value of `self`.
    /// Neither `self` nor `f` are forced before the result is.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::Lazy;
    ///
    /// let length = Lazy::new(|| String::from("lazy")).map(|s| s.len());
    /// assert_eq!(*length.value(), 4);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Lazy<'a, U>
    where
        F: FnOnce(&T) -> U + 'a,
    {
        let this = self.clone();
        Lazy::new(move || f(this.value()))
    }

    /// Defer applying `f` to the value of `self` and forcing the resulting [`Lazy`].
    /// Nothing is forced before the result is.
    pub fn flat_map<U, F>(&self, f: F) -> Lazy<'a, U>
    where
        U: Clone,
        F: FnOnce(&T) -> Lazy<'a, U> + 'a,
    {
        let this = self.clone();
        Lazy::new(move || f(this.value()).value().clone())
    }
}

impl<'a, T> Clone for Lazy<'a, T> {
    fn clone(&self) -> Self {
        Lazy(Rc::clone(&self.0))
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Lazy<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(<pending>)"),
        }
    }
}
