//! This module defines functions which combine lists with optional values and with pairs.
//! In particular, there are functions to get from a list of optional values to an optional list and from a list of pairs to a pair of lists.

use super::List;

/// The function keeps the present entries of a list of optional values and discards the absent ones.
/// - `list` is the list of optional values.
///
/// # Examples
///
/// ```
/// use fpstream::combinators::flatten_option;
/// use fpstream::list;
///
/// assert_eq!(flatten_option(&list![Some(1), None, Some(3)]), list![1, 3]);
/// ```
pub fn flatten_option<T: Clone>(list: &List<Option<T>>) -> List<T> {
    list.fold(List::new(), |present, item| match item {
        Some(item) => present.cons(item.clone()),
        None => present,
    })
    .reverse()
}

/// The function turns a list of optional values into an optional list: the list of all values if every entry is present and [`None`] otherwise.
/// - `list` is the list of optional values.
///
/// The traversal stops at the first absent entry.
///
/// # Examples
///
/// ```
/// use fpstream::combinators::sequence;
/// use fpstream::list;
///
/// assert_eq!(sequence(&list![Some(1), Some(2)]), Some(list![1, 2]));
/// assert_eq!(sequence(&list![Some(1), None]), None);
/// ```
pub fn sequence<T: Clone>(list: &List<Option<T>>) -> Option<List<T>> {
    traverse(list, Option::clone)
}

/// The function applies a partial function to every entry of a list and collects the results if all of them are present.
/// - `list` is the list to traverse.
/// - `f` is the partial function.
///
/// `f` is applied from front to back and not applied anymore after it returned [`None`] once.
///
/// # Examples
///
/// ```
/// use fpstream::combinators::traverse;
/// use fpstream::list;
///
/// let digits = list!['1', '2', '3'];
/// assert_eq!(traverse(&digits, |c| c.to_digit(10)), Some(list![1, 2, 3]));
/// assert_eq!(traverse(&list!['1', 'x'], |c| c.to_digit(10)), None);
/// ```
pub fn traverse<T, U, F>(list: &List<T>, mut f: F) -> Option<List<U>>
where
    U: Clone,
    F: FnMut(&T) -> Option<U>,
{
    list.iter()
        .try_fold(List::new(), |results, item| {
            f(item).map(|result| results.cons(result))
        })
        .map(|results| results.reverse())
}

/// The function combines every entry of one list with every entry of another one.
/// - `first` is the list whose entries vary slowest.
/// - `second` is the list whose entries vary fastest.
/// - `f` combines a pair of entries.
///
/// The function is in analogy to the cartesian product of sets.
///
/// # Examples
///
/// ```
/// use fpstream::combinators::product;
/// use fpstream::list;
///
/// let pairs = product(&list![1, 2], &list!['a', 'b'], |n, c| format!("{}{}", n, c));
/// assert_eq!(pairs.to_string(), "1a, 1b, 2a, 2b");
/// ```
pub fn product<A, B, C, F>(first: &List<A>, second: &List<B>, mut f: F) -> List<C>
where
    C: Clone,
    F: FnMut(&A, &B) -> C,
{
    first.flat_map(|a| second.map(|b| f(a, b)))
}

/// The function splits a list of pairs into the list of first components and the list of second components.
/// - `list` is the list of pairs.
///
/// # Examples
///
/// ```
/// use fpstream::combinators::unzip;
/// use fpstream::list;
///
/// assert_eq!(unzip(&list![(1, 'a'), (2, 'b')]), (list![1, 2], list!['a', 'b']));
/// ```
pub fn unzip<A: Clone, B: Clone>(list: &List<(A, B)>) -> (List<A>, List<B>) {
    list.fold_right((List::new(), List::new()), |(firsts, seconds), (a, b)| {
        (firsts.cons(a.clone()), seconds.cons(b.clone()))
    })
}

/// The function combines two lists entry by entry.
/// - `first` is the list providing the left arguments of `f`.
/// - `second` is the list providing the right arguments of `f`.
/// - `f` combines two entries at the same position.
///
/// The result is as long as the shorter of the two lists; the remaining entries of the longer one are ignored.
///
/// # Examples
///
/// ```
/// use fpstream::combinators::zip_with;
/// use fpstream::list;
///
/// assert_eq!(zip_with(&list![1, 2, 3], &list![10, 20], |a, b| a + b), list![11, 22]);
/// ```
pub fn zip_with<A, B, C, F>(first: &List<A>, second: &List<B>, mut f: F) -> List<C>
where
    C: Clone,
    F: FnMut(&A, &B) -> C,
{
    first
        .iter()
        .zip(second.iter())
        .fold(List::new(), |zipped, (a, b)| zipped.cons(f(a, b)))
        .reverse()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::list;

    #[test]
    fn test_flatten_option() {
        assert_eq!(flatten_option(&list![None, Some('a'), None]), list!['a']);
        assert!(flatten_option::<u8>(&List::new()).is_empty());
    }

    #[test]
    fn test_sequence() {
        assert_eq!(
            sequence(&list![Some(1), Some(2), Some(3)]),
            Some(list![1, 2, 3])
        );
        assert_eq!(sequence(&list![Some(1), None, Some(3)]), None);
        assert_eq!(sequence::<u8>(&List::new()), Some(List::<u8>::new()));
    }

    #[test]
    fn test_traverse_short_circuits() {
        let mut seen = 0;
        let result = traverse(&list![1, -1, 2, 3], |n: &i32| {
            seen += 1;
            u32::try_from(*n).ok()
        });
        assert_eq!(result, None);
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_product() {
        let pairs = product(&list![1, 2], &list![10, 20, 30], |a, b| a * b);
        assert_eq!(pairs, list![10, 20, 30, 20, 40, 60]);
        let none = List::<u8>::new();
        assert!(product(&list![1], &none, |a, b| (*a, *b)).is_empty());
    }

    #[test]
    fn test_zip_with() {
        let zipped = zip_with(&list!['a', 'b', 'c'], &list![1, 2], |c, n| (*c, *n));
        assert_eq!(zipped, list![('a', 1), ('b', 2)]);
        let none = List::<u8>::new();
        assert!(zip_with(&none, &list![1], |a, b| a + b).is_empty());
    }

    #[test]
    fn test_unzip_recovers_zipped_prefixes() {
        let first = list![1, 2, 3, 4];
        let second = list!['a', 'b'];
        let shortest = first.len().min(second.len());

        let zipped = zip_with(&first, &second, |a, b| (*a, *b));
        assert_eq!(
            unzip(&zipped),
            (first.take(shortest), second.take(shortest))
        );
    }
}
