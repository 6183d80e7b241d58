//! Property-based tests for stream propagation

use proptest::prelude::*;
use sluice::{collect, count, filtered, for_each, mapped, mk_dynamic, Sink, Stream};
use std::sync::{Arc, Mutex};

proptest! {
    #[test]
    fn prop_fan_out_reaches_every_live_subscriber(
        subscribers in 1usize..20,
        values in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let input: Stream<i32> = Stream::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sinks: Vec<_> = (0..subscribers)
            .map(|i| {
                let seen = seen.clone();
                for_each(&input, move |v: &i32| seen.lock().unwrap().push((i, *v)))
            })
            .collect();

        for v in &values {
            input.fire(*v);
        }

        let expected: Vec<(usize, i32)> = values
            .iter()
            .flat_map(|v| (0..subscribers).map(move |i| (i, *v)))
            .collect();
        prop_assert_eq!(seen.lock().unwrap().clone(), expected);
        drop(sinks);
    }

    #[test]
    fn prop_dropped_subscribers_never_fire(
        keep in prop::collection::vec(any::<bool>(), 1..20),
        value in any::<i32>()
    ) {
        let input: Stream<i32> = Stream::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut kept = Vec::new();
        for (i, k) in keep.iter().enumerate() {
            let seen = seen.clone();
            let sink = for_each(&input, move |_: &i32| seen.lock().unwrap().push(i));
            if *k {
                kept.push(sink);
            }
        }

        input.fire(value);

        let expected: Vec<usize> = keep
            .iter()
            .enumerate()
            .filter(|(_, k)| **k)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(seen.lock().unwrap().clone(), expected);
        prop_assert_eq!(input.subscriber_count(), kept.len());
    }

    #[test]
    fn prop_mapped_fires_once_per_upstream_fire(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let input: Stream<i64> = Stream::new();
        let out = collect(&mapped(&input, |x: &i64| x.wrapping_mul(3)));

        for v in &values {
            input.fire(*v);
        }

        let expected: Vec<i64> = values.iter().map(|x| x.wrapping_mul(3)).collect();
        prop_assert_eq!(out.result(), expected);
    }

    #[test]
    fn prop_filtered_matches_predicate(values in prop::collection::vec(any::<u8>(), 0..50)) {
        let input: Stream<u8> = Stream::new();
        let out = collect(&filtered(&input, |x: &u8| x % 3 == 0));

        for v in &values {
            input.fire(*v);
        }

        let expected: Vec<u8> = values.into_iter().filter(|x| x % 3 == 0).collect();
        prop_assert_eq!(out.result(), expected);
    }

    #[test]
    fn prop_count_equals_number_of_fires(n in 0usize..200) {
        let input: Stream<()> = Stream::new();
        let c = count(&input);
        prop_assert_eq!(c.current(), 0);

        for _ in 0..n {
            input.fire(());
        }
        prop_assert_eq!(c.current(), n);
    }

    #[test]
    fn prop_dynamic_holds_latest(initial in any::<i32>(), values in prop::collection::vec(any::<i32>(), 0..30)) {
        let input: Stream<i32> = Stream::new();
        let d = mk_dynamic(&input, initial);
        prop_assert_eq!(d.current(), initial);

        for v in &values {
            input.fire(*v);
            prop_assert_eq!(d.current(), *v);
        }
    }

    #[test]
    fn prop_collect_matches_fired_sequence(values in prop::collection::vec(".*", 0..20)) {
        let input: Stream<String> = Stream::new();
        let all = collect(&input);

        for v in &values {
            input.fire(v.clone());
        }
        prop_assert_eq!(all.result(), values);
    }
}
