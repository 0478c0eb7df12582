//! This module provides persistent singly-linked lists.
//!
//! Every operation leaves its receiver untouched and returns a new list which shares as many nodes
//! with existing lists as possible.
//! All traversals are loops, so lists of any length can be folded, compared and dropped without
//! exhausting the stack.

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// [`List<T>`] defines immutable lists of type `T` which are either empty (`Nil`) or a head
/// prepended to another list (`Cons`).
///
/// Cloning a list is cheap: it only bumps a reference count.
pub struct List<T>(Option<Rc<Node<T>>>);

/// A `Cons`-cell.
struct Node<T> {
    /// first entry
    head: T,
    /// all but the first entry
    rest: List<T>,
    /// number of `Cons`-cells starting with this one
    len: usize,
}

impl<T> List<T> {
    /// Create the empty list. No allocation happens.
    #[inline]
    pub const fn new() -> Self {
        List(None)
    }

    /// Create a list of the items of `items` in iteration order.
    /// - `items` is folded from its back to its front with [`cons`](`List::cons`).
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::List;
    ///
    /// let chars = List::of(['a', 'b', 'c']);
    /// assert_eq!(chars.to_string(), "a, b, c");
    /// ```
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Self::new(), |list, item| list.cons(item))
    }

    /// Prepend `head` to `self`. The new list shares all of `self`.
    #[inline]
    pub fn cons(&self, head: T) -> Self {
        List(Some(Rc::new(Node {
            head,
            rest: self.clone(),
            len: self.len() + 1,
        })))
    }

    /// The first entry of `self` if there is one.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.0.as_deref().map(|node| &node.head)
    }

    /// All but the first entry of `self` if `self` is not empty.
    #[inline]
    pub fn tail(&self) -> Option<&Self> {
        self.0.as_deref().map(|node| &node.rest)
    }

    /// The last entry of `self` if there is one.
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// The number of entries of `self`. Takes constant time.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.as_deref().map_or(0, |node| node.len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Whether `self` and `other` are the very same list in memory (and not just equal).
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(node), Some(other)) => Rc::ptr_eq(node, other),
            _ => false,
        }
    }

    /// Iterate over references to the entries of `self` from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.0.as_deref(),
        }
    }

    /// The entry at position `index` (counting from `0`) or [`None`] if `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::list;
    ///
    /// let chars = list!['a', 'b', 'c'];
    /// assert_eq!(chars.get_at(1), Some(&'b'));
    /// assert_eq!(chars.get_at(3), None);
    /// ```
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Accumulate the entries of `self` from front to back.
    /// - `identity` is the initial accumulator.
    /// - `f` combines the accumulator with the next entry.
    ///
    /// This is the primitive the other list operations are built on; it runs in constant stack
    /// space.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::list;
    ///
    /// let word = list!["a", "b", "c"].fold(String::new(), |acc, s| acc + s);
    /// assert_eq!(word, "abc");
    /// ```
    #[inline]
    pub fn fold<U, F>(&self, identity: U, f: F) -> U
    where
        F: FnMut(U, &T) -> U,
    {
        self.iter().fold(identity, f)
    }

    /// Call `f` on every entry of `self` from front to back.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
    }

    /// Remove the first `n` entries of `self`.
    /// If `n` exceeds the length of `self` the result is empty; if `n` is `0` the result is `self`.
    /// The result shares all its nodes with `self`.
    pub fn drop(&self, n: usize) -> Self {
        if n >= self.len() {
            return Self::new();
        }

        let mut remaining = n;
        self.drop_while(|_| {
            let dropping = remaining > 0;
            remaining = remaining.saturating_sub(1);
            dropping
        })
    }

    /// Remove entries from the front of `self` as long as they satisfy `p`.
    /// The result shares all its nodes with `self`.
    pub fn drop_while<P>(&self, mut p: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut list = self;
        while let Some(node) = list.0.as_deref() {
            if !p(&node.head) {
                break;
            }
            list = &node.rest;
        }
        list.clone()
    }
}

impl<T: Clone> List<T> {
    /// The entries of `self` in reverse order.
    pub fn reverse(&self) -> Self {
        self.fold(Self::new(), |list, item| list.cons(item.clone()))
    }

    /// Accumulate the entries of `self` from back to front.
    /// - `identity` is the initial accumulator.
    /// - `f` combines the accumulator with the next entry.
    ///
    /// The fold is carried out as a [`fold`](`List::fold`) over [`reverse`](`List::reverse`), so
    /// it runs in constant stack space.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::list;
    ///
    /// let word = list!["a", "b", "c"].fold_right(String::new(), |acc, s| acc + s);
    /// assert_eq!(word, "cba");
    /// ```
    pub fn fold_right<U, F>(&self, identity: U, f: F) -> U
    where
        F: FnMut(U, &T) -> U,
    {
        self.reverse().fold(identity, f)
    }

    /// Append `other` to `self`. Only the nodes of `self` are copied; `other` is shared.
    pub fn concat(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        self.fold_right(other.clone(), |list, item| list.cons(item.clone()))
    }

    /// The first `n` entries of `self` (or all of them if there are fewer).
    pub fn take(&self, n: usize) -> Self {
        if n >= self.len() {
            return self.clone();
        }
        self.iter()
            .take(n)
            .fold(Self::new(), |list, item| list.cons(item.clone()))
            .reverse()
    }

    /// All entries of `self` but the last one.
    pub fn init(&self) -> Self {
        self.reverse().drop(1).reverse()
    }

    /// The entries of `self` which satisfy `p`, in their original order.
    /// `p` is called on the entries from front to back.
    pub fn filter<P>(&self, mut p: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.fold(Self::new(), |list, item| {
            if p(item) {
                list.cons(item.clone())
            } else {
                list
            }
        })
        .reverse()
    }
}

impl<T> List<T> {
    /// Apply `f` to every entry of `self` from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::list;
    ///
    /// assert_eq!(list!['a', 'b'].map(|c| c.to_ascii_uppercase()), list!['A', 'B']);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> List<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        self.fold(List::new(), |list, item| list.cons(f(item)))
            .reverse()
    }

    /// Apply `f` to every entry of `self` from front to back and concatenate the results.
    pub fn flat_map<U, F>(&self, mut f: F) -> List<U>
    where
        U: Clone,
        F: FnMut(&T) -> List<U>,
    {
        self.fold(List::new(), |list, item| {
            f(item).fold(list, |list, item| list.cons(item.clone()))
        })
        .reverse()
    }
}

impl<T: Clone> List<List<T>> {
    /// Concatenate the lists in `self`, removing one level of nesting.
    pub fn flatten(&self) -> List<T> {
        self.flat_map(List::clone)
    }
}

/// [`Nested<T>`] defines entries of lists nested to arbitrary (and non-uniform) depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested<T> {
    /// A plain entry.
    Item(T),
    /// A list which is nested one level deeper.
    List(List<Nested<T>>),
}

impl<T: Clone> List<Nested<T>> {
    /// Remove all levels of nesting, keeping the entries in order.
    ///
    /// The nesting is traversed with an explicit work stack, so neither the depth nor the length
    /// of the nested lists is bounded by the call stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpstream::list;
    /// use fpstream::list::Nested;
    ///
    /// let nested = list![
    ///     Nested::List(list![Nested::Item('a')]),
    ///     Nested::List(list![Nested::List(list![Nested::Item('b')])]),
    ///     Nested::Item('c'),
    /// ];
    /// assert_eq!(nested.flat(), list!['a', 'b', 'c']);
    /// ```
    pub fn flat(&self) -> List<T> {
        let mut flattened = List::new();
        let mut pending = vec![self.iter()];

        while let Some(entries) = pending.last_mut() {
            match entries.next() {
                None => {
                    pending.pop();
                }
                Some(Nested::Item(item)) => flattened = flattened.cons(item.clone()),
                Some(Nested::List(list)) => pending.push(list.iter()),
            }
        }

        flattened.reverse()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut node) => node.rest.0.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List(self.0.clone())
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && (self.ptr_eq(other) || self.iter().eq(other.iter()))
    }
}

impl<T: Eq> Eq for List<T> {}

/// Render the entries separated by `", "`; the empty list renders as the empty string.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.iter();
        if let Some(first) = entries.next() {
            write!(f, "{}", first)?;
        }
        for entry in entries {
            write!(f, ", {}", entry)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'l, T> IntoIterator for &'l List<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`Iter`] walks a [`List`] from front to back.
pub struct Iter<'l, T> {
    next: Option<&'l Node<T>>,
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.rest.0.as_deref();
            &node.head
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.next.map_or(0, |node| node.len);
        (len, Some(len))
    }
}

impl<'l, T> ExactSizeIterator for Iter<'l, T> {}

impl<'l, T> Clone for Iter<'l, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

/// Build a [`List`] of the given entries in the given order.
///
/// # Examples
///
/// ```
/// use fpstream::list;
///
/// assert_eq!(list![1, 2, 3].len(), 3);
/// let empty: fpstream::List<u8> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::List::of([$($item),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const LENGTH_LONG: usize = 200_000;
    const DEPTH_NESTED: usize = 1_000;

    fn chars() -> List<char> {
        list!['a', 'b', 'c']
    }

    fn long() -> List<usize> {
        (0..LENGTH_LONG).collect()
    }

    #[test]
    fn test_of() {
        let list = List::of([1, 2, 3]);
        assert_eq!(list.head(), Some(&1));
        assert_eq!(list.last(), Some(&3));
        assert_eq!(list.len(), 3);
        assert!(List::<u8>::of([]).is_empty());
    }

    #[test]
    fn test_cons_shares_rest() {
        let list = chars();
        let longer = list.cons('_');
        assert!(longer.tail().unwrap().ptr_eq(&list));
        assert_eq!(longer, list!['_', 'a', 'b', 'c']);
        assert_eq!(List::new().cons('_'), list!['_']);
    }

    #[test]
    fn test_head_tail() {
        let empty: List<char> = List::new();
        assert_eq!(empty.head(), None);
        assert!(empty.tail().is_none());
        assert_eq!(chars().head(), Some(&'a'));
        assert_eq!(chars().tail(), Some(&list!['b', 'c']));
    }

    #[test]
    fn test_get_at() {
        let list = chars();
        assert_eq!(list.get_at(0), Some(&'a'));
        assert_eq!(list.get_at(2), Some(&'c'));
        assert_eq!(list.get_at(3), None);
        assert_eq!(list.get_at(usize::MAX), None);
    }

    #[test]
    fn test_fold() {
        let sum = list![1, 2, 3].fold(0, |acc, n| acc + n);
        assert_eq!(sum, 6);
        assert_eq!(List::<u8>::new().fold(7, |_, _| 0), 7);

        let reversed = chars().fold(List::new(), |acc, c| acc.cons(*c));
        assert_eq!(reversed, chars().reverse());
    }

    #[test]
    fn test_fold_right() {
        let rebuilt = chars().fold_right(List::new(), |acc, c| acc.cons(*c));
        assert_eq!(rebuilt, chars());

        let order = chars().fold_right(Vec::new(), |mut acc, c| {
            acc.push(*c);
            acc
        });
        assert_eq!(order, ['c', 'b', 'a']);
    }

    #[test]
    fn test_for_each() {
        let mut seen = Vec::new();
        chars().for_each(|c| seen.push(*c));
        assert_eq!(seen, ['a', 'b', 'c']);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(chars().reverse(), list!['c', 'b', 'a']);
        assert_eq!(chars().reverse().reverse(), chars());
        assert!(List::<char>::new().reverse().is_empty());
    }

    #[test]
    fn test_concat() {
        let tail = list!['d'];
        let both = chars().concat(&tail);
        assert_eq!(both, list!['a', 'b', 'c', 'd']);
        assert_eq!(both.len(), chars().len() + tail.len());
        assert!(both.drop(3).ptr_eq(&tail));
        assert_eq!(List::new().concat(&tail), tail);

        let list = chars();
        assert!(list.concat(&List::new()).ptr_eq(&list));
    }

    #[test]
    fn test_drop() {
        let list = chars();
        assert!(list.drop(0).ptr_eq(&list));
        assert_eq!(list.drop(2), list!['c']);
        assert!(list.drop(list.len()).is_empty());
        assert!(list.drop(list.len() + 1).is_empty());
        assert!(List::<char>::new().drop(5).is_empty());
    }

    #[test]
    fn test_drop_while() {
        let list = chars();
        assert!(list.drop_while(|c| c.is_lowercase()).is_empty());
        assert_eq!(list.drop_while(|c| *c != 'c'), list!['c']);
        assert!(list.drop_while(|_| false).ptr_eq(&list));
    }

    #[test]
    fn test_take() {
        assert_eq!(chars().take(2), list!['a', 'b']);
        assert!(chars().take(0).is_empty());
        assert_eq!(chars().take(9), chars());
    }

    #[test]
    fn test_init() {
        assert_eq!(chars().init(), list!['a', 'b']);
        assert!(List::<char>::new().init().is_empty());
    }

    #[test]
    fn test_filter() {
        assert_eq!(chars().filter(|c| *c != 'b'), list!['a', 'c']);
        assert!(List::<char>::new().filter(|_| true).is_empty());
    }

    #[test]
    fn test_map() {
        let mut calls = Vec::new();
        let upper = chars().map(|c| {
            calls.push(*c);
            c.to_ascii_uppercase()
        });
        assert_eq!(upper, list!['A', 'B', 'C']);
        assert_eq!(calls, ['a', 'b', 'c']);
    }

    #[test]
    fn test_flat_map() {
        let both = chars().flat_map(|c| list![*c, c.to_ascii_uppercase()]);
        assert_eq!(both, list!['a', 'A', 'b', 'B', 'c', 'C']);
        assert!(List::<char>::new().flat_map(|c| list![*c]).is_empty());
    }

    #[test]
    fn test_flatten() {
        let lists = list![list![1], List::new(), list![2, 3]];
        assert_eq!(lists.flatten(), list![1, 2, 3]);
    }

    #[test]
    fn test_flat() {
        let c = Nested::List(list![Nested::List(list![Nested::Item('c')])]);
        let nested = list![
            Nested::List(list![Nested::Item('a')]),
            Nested::List(list![Nested::List(list![Nested::Item('b')])]),
            Nested::List(list![c]),
        ];
        assert_eq!(nested.flat(), chars());
        assert!(List::<Nested<char>>::new().flat().is_empty());
    }

    #[test]
    fn test_flat_deep() {
        let mut nested = list![Nested::Item(0)];
        for _ in 0..DEPTH_NESTED {
            nested = list![Nested::List(nested)];
        }
        assert_eq!(nested.flat(), list![0]);
    }

    #[test]
    fn test_eq() {
        assert_eq!(chars(), list!['a', 'b', 'c']);
        assert_ne!(chars(), list!['a', 'b']);
        assert_ne!(chars(), list!['a', 'b', 'd']);
        assert_eq!(List::<char>::new(), List::default());
    }

    #[test]
    fn test_from_iter() {
        let list: List<_> = "abc".chars().collect();
        assert_eq!(list, chars());
        assert_eq!(list.iter().len(), 3);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display() {
        assert_eq!(chars().to_string(), "a, b, c");
        assert_eq!(List::<char>::new().to_string(), "");
        assert_eq!(chars().tail().unwrap().to_string(), "b, c");
        assert_eq!(format!("{:?}", list![1, 2]), "[1, 2]");
    }

    #[test]
    fn test_long_fold() {
        let list = long();
        assert_eq!(list.len(), LENGTH_LONG);
        assert_eq!(
            list.fold(0, |acc, n| acc + n),
            LENGTH_LONG * (LENGTH_LONG - 1) / 2
        );
        assert_eq!(list.fold_right(0, |acc, n| acc.max(*n)), LENGTH_LONG - 1);
        assert_eq!(list.reverse().reverse(), list);
        assert_eq!(list.last(), Some(&(LENGTH_LONG - 1)));
    }

    #[test]
    fn test_long_drop() {
        let list = long();
        let shared = list.drop(LENGTH_LONG / 2);
        drop(list);
        assert_eq!(shared.head(), Some(&(LENGTH_LONG / 2)));
        drop(shared);
    }
}
