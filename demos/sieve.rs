mod primes {
    use fpstream::{Lazy, List, Stream};

    /// The sieve of Eratosthenes on a stream of candidates: the head is a prime and the tail is
    /// sieved again after striking out the multiples of that prime.
    pub fn sieve<'a>(candidates: &Stream<'a, u64>) -> Stream<'a, u64> {
        match candidates {
            Stream::Empty => Stream::empty(),
            Stream::Cons(head, tail) => {
                let prime = *head.value();
                let tail = tail.clone();
                Stream::cons(
                    Lazy::from_value(prime),
                    Lazy::new(move || {
                        sieve(&tail.value().filter(move |n| n % prime != 0))
                    }),
                )
            }
        }
    }

    pub fn primes<'a>() -> Stream<'a, u64> {
        sieve(&Stream::iterate(2, |n| n + 1))
    }

    /// Pairs of primes whose difference is two.
    pub fn twins(primes: &Stream<'_, u64>, count: usize) -> List<(u64, u64)> {
        let mut pairs = Vec::new();
        let mut cell = primes.clone();
        while pairs.len() < count {
            let (current, rest) = match &cell {
                Stream::Empty => break,
                Stream::Cons(head, tail) => (*head.value(), tail.value().clone()),
            };
            if let Some(&next) = rest.head() {
                if next - current == 2 {
                    pairs.push((current, next));
                }
            }
            cell = rest;
        }
        List::of(pairs)
    }
}

use fpstream::Stream;

use std::env;

const DEFAULT_COUNT: usize = 20;

fn main() {
    let count = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_COUNT);

    let primes = primes::primes();
    println!(
        "first {} primes: {}",
        count,
        primes.take_at_most(count).to_list()
    );
    println!(
        "first {} twin primes: {:?}",
        count,
        primes::twins(&primes, count)
    );

    // a finite sieve ends as soon as its candidates do
    let candidates = Stream::iterate(2, |n| n + 1).take_while(|n| *n < 1000);
    let below = primes::sieve(&candidates);
    println!("primes below 1000: {}", below.iter().count());
}
