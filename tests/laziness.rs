use fpstream::combinators::sequence;
use fpstream::{list, Lazy, List, Stream};

use std::cell::{Cell, RefCell};

#[test]
fn test_lazy_runs_once() {
    let runs = Cell::new(0);
    let lazy = Lazy::new(|| {
        runs.set(runs.get() + 1);
        "value"
    });
    let shared = lazy.clone();

    assert_eq!(runs.get(), 0);
    assert_eq!(*lazy.value(), "value");
    assert_eq!(*shared.value(), "value");
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_pipeline_order() {
    let log = RefCell::new(Vec::new());

    let pipeline = Stream::from(1)
        .map(|n| {
            log.borrow_mut().push(format!("map {}", n));
            n * n
        })
        .filter(|n| {
            log.borrow_mut().push(format!("filter {}", n));
            n % 2 == 0
        });

    assert_eq!(pipeline.take_at_most(2).to_list(), list![4, 16]);
    assert_eq!(
        *log.borrow(),
        [
            "map 1",
            "filter 1",
            "map 2",
            "filter 4",
            "map 3",
            "filter 9",
            "map 4",
            "filter 16",
        ]
    );
}

#[test]
fn test_list_laws() {
    let list: List<u32> = (0..10_000).collect();

    assert_eq!(list.reverse().reverse(), list);
    let rebuilt = list.fold_right(List::new(), |rest, n| rest.cons(*n));
    assert_eq!(rebuilt, list);
    assert_eq!(list.concat(&list).len(), 2 * list.len());
    assert!(list.drop(list.len()).is_empty());
    assert!(list.drop(0).ptr_eq(&list));
    assert_eq!(list.drop(10).len(), list.len() - 10);
}

#[test]
fn test_take_from_infinite() {
    for n in [0, 1, 10, 1000] {
        let prefix = Stream::from(0).take_at_most(n).to_list();
        assert_eq!(prefix, (0..n as i64).collect::<List<_>>());
    }
}

#[test]
fn test_fibs() {
    assert_eq!(
        Stream::fibs().take_at_most(10).to_list().to_string(),
        "1, 1, 2, 3, 5, 8, 13, 21, 34, 55"
    );
}

#[test]
fn test_sequence() {
    assert_eq!(sequence(&list![Some(1), Some(2)]), Some(list![1, 2]));
    assert_eq!(sequence(&list![Some(1), None]), None);
}

#[test]
fn test_infinite_stream_is_never_traversed() {
    let tails = Cell::new(0);
    let counted = Stream::iterate(0u64, |n| {
        tails.set(tails.get() + 1);
        n + 1
    });

    let pipeline = counted
        .map(|n| n * 3)
        .append(&Stream::empty())
        .take_while(|n| *n < 1_000_000);
    assert_eq!(tails.get(), 0);

    assert!(pipeline.exists(|n| *n == 30));
    assert_eq!(tails.get(), 10);
}
