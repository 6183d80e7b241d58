//! Firing from several threads at once

use sluice::{collect, count, subscription, Sink, Stream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const FIRES_PER_THREAD: usize = 500;

#[test]
fn concurrent_fires_are_all_counted() {
    let input: Stream<usize> = Stream::new();
    let n = count(&input);
    let all = collect(&input);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let input = input.clone();
            thread::spawn(move || {
                for i in 0..FIRES_PER_THREAD {
                    input.fire(t * FIRES_PER_THREAD + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(n.current(), THREADS * FIRES_PER_THREAD);

    let mut values = all.result();
    values.sort_unstable();
    let expected: Vec<usize> = (0..THREADS * FIRES_PER_THREAD).collect();
    assert_eq!(values, expected);
}

#[test]
fn fire_passes_do_not_interleave() {
    let input: Stream<usize> = Stream::new();
    let in_pass = Arc::new(AtomicBool::new(false));
    let overlaps = Arc::new(AtomicUsize::new(0));

    // Two subscribers bracket each pass; a second fire starting mid-pass
    // would see the flag already set.
    let enter = {
        let in_pass = in_pass.clone();
        let overlaps = overlaps.clone();
        subscription(move |_: &usize| {
            if in_pass.swap(true, Ordering::SeqCst) {
                overlaps.fetch_add(1, Ordering::SeqCst);
            }
            thread::yield_now();
        })
    };
    let exit = {
        let in_pass = in_pass.clone();
        subscription(move |_: &usize| in_pass.store(false, Ordering::SeqCst))
    };
    input.subscribe(&enter);
    input.subscribe(&exit);

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let input = input.clone();
            thread::spawn(move || {
                for i in 0..100 {
                    input.fire(i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(overlaps.load(Ordering::SeqCst), 0);
}

#[test]
fn subscribe_while_firing_on_other_threads() {
    let input: Stream<u32> = Stream::new();
    let firer = {
        let input = input.clone();
        thread::spawn(move || {
            for i in 0..1000 {
                input.fire(i);
            }
        })
    };

    let collectors: Vec<_> = (0..50).map(|_| collect(&input)).collect();
    firer.join().unwrap();

    input.fire(u32::MAX);
    for collector in &collectors {
        assert_eq!(collector.result().last(), Some(&u32::MAX));
    }
}
