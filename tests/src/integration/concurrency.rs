//! # Concurrency Tests
//!
//! `SharedBloomFilter` under many readers and a re-initializing writer.
//! Readers must only ever observe a complete filter: either the old one or
//! the new one, never a mix.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    use bf_02_membership_filter::{
        BloomFilter, FilterConfig, Metrics, MembershipFilterApi, SharedBloomFilter,
    };

    const READERS: usize = 8;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// All-ones filter: every non-empty value is contained
    fn full(bytes: usize) -> Vec<u8> {
        vec![0xff; bytes]
    }

    /// All-zeros filter: nothing is contained
    fn clear(bytes: usize) -> Vec<u8> {
        vec![0x00; bytes]
    }

    // =============================================================================
    // READERS VS. WRITER
    // =============================================================================

    #[test]
    fn test_readers_see_consistent_snapshots() {
        let filter = SharedBloomFilter::new(FilterConfig::default());
        filter.initialize(&full(128), 0, 5).unwrap();

        let stop = Arc::new(AtomicBool::new(false));
        let barrier = Arc::new(Barrier::new(READERS + 1));

        let readers: Vec<_> = (0..READERS)
            .map(|r| {
                let filter = filter.clone();
                let stop = Arc::clone(&stop);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let mut observations = 0u64;
                    loop {
                        let snapshot = filter.snapshot();
                        // full(128) => 1024 bits contains all; clear(64) => 512 bits contains none
                        let value = format!("reader-{}-{}", r, observations);
                        match snapshot.size_bits() {
                            1024 => assert!(snapshot.might_contain(value.as_bytes())),
                            512 => assert!(!snapshot.might_contain(value.as_bytes())),
                            other => panic!("torn filter with {} bits", other),
                        }
                        observations += 1;
                        if stop.load(Ordering::Relaxed) {
                            break;
                        }
                    }
                    observations
                })
            })
            .collect();

        barrier.wait();
        for round in 0..200 {
            let bitmap = if round % 2 == 0 { clear(64) } else { full(128) };
            filter.initialize(&bitmap, 0, 5).unwrap();
        }
        stop.store(true, Ordering::Relaxed);

        let total: u64 = readers.into_iter().map(|h| h.join().unwrap()).sum();
        assert!(total > 0);
    }

    #[test]
    fn test_rejected_writes_never_disturb_readers() {
        let filter = SharedBloomFilter::new(FilterConfig::default());
        filter.initialize(&full(16), 0, 3).unwrap();

        let writer = {
            let filter = filter.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    // padding beyond capacity is always rejected
                    assert!(filter.initialize(&clear(16), 200, 3).is_err());
                }
            })
        };

        for i in 0..5_000 {
            assert!(filter.might_contain(format!("value-{}", i).as_bytes()));
        }
        writer.join().unwrap();
        assert_eq!(filter.size_bits(), 128);
    }

    #[test]
    fn test_metrics_count_every_lookup_across_threads() {
        let metrics = Arc::new(Metrics::new());
        let filter: Arc<dyn MembershipFilterApi> = Arc::new(SharedBloomFilter::with_metrics(
            FilterConfig::default(),
            Arc::clone(&metrics),
        ));
        filter.initialize(&[0x46, 0xcc, 0x19], 1, 16).unwrap();

        let handles: Vec<_> = (0..READERS)
            .map(|t| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    for i in 0..250 {
                        filter.might_contain(format!("t{}-{}", t, i).as_bytes());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.lookups_performed, (READERS * 250) as u64);
        assert_eq!(snapshot.filters_initialized, 1);
        assert_eq!(snapshot.bytes_held, 3);
    }

    #[test]
    fn test_plain_filter_is_shareable_by_reference() {
        let filter = BloomFilter::new(&[0x46, 0xcc, 0x19], 1, 16).unwrap();
        let doc0 = b"projects/project-1/databases/database-1/documents/coll/doc0";

        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert!(filter.might_contain(doc0)));
            }
        });
    }
}
