//! # Integration Test Flows
//!
//! Tests that the digest, the membership filter and the wire format agree
//! end to end.
//!
//! ## Flows Tested:
//!
//! 1. **Backend JSON → BloomFilter → might_contain**: golden pairs replayed
//! 2. **Digest → HashSeeds**: the filter probes exactly where the digest says
//! 3. **Configured limits**: `BF_MAX_*` variables, parsed by `FilterConfig`,
//!    reach the filter

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use bf_01_md5_digest::{md5_digest, Md5Context};
    use bf_02_membership_filter::{
        verify_golden, BloomFilter, EncodedBloomFilter, FilterConfig, FilterError, HashSeeds,
        MembershipTestResults, DEFAULT_DOCUMENT_PREFIX,
    };

    use crate::fixtures;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn golden_pair(stem: &str) -> (EncodedBloomFilter, MembershipTestResults) {
        let encoded =
            EncodedBloomFilter::from_json(&fixtures::read(&format!("{}_bloom_filter_proto.json", stem)))
                .unwrap();
        let expected = MembershipTestResults::from_json(&fixtures::read(&format!(
            "{}_membership_test_result.json",
            stem
        )))
        .unwrap();
        (encoded, expected)
    }

    // =============================================================================
    // BACKEND JSON → FILTER
    // =============================================================================

    #[test]
    fn test_golden_pairs_replay_cleanly() {
        for stem in ["bloom_filter_golden_2", "bloom_filter_golden_10000"] {
            let (encoded, expected) = golden_pair(stem);
            let filter = BloomFilter::from_encoded(&encoded).unwrap();
            let report = verify_golden(&filter, DEFAULT_DOCUMENT_PREFIX, &expected).unwrap();
            assert!(report.passed(), "{}: {:?}", stem, report.mismatches.first());
        }
    }

    #[test]
    fn test_golden_bitmap_survives_reencoding() {
        let (encoded, expected) = golden_pair("bloom_filter_golden_10000");
        let bitmap = STANDARD.decode(&encoded.bits.bitmap).unwrap();

        let reencoded = EncodedBloomFilter::new(&bitmap, encoded.bits.padding, encoded.hash_count);
        let json = serde_json::to_string(&reencoded).unwrap();
        let filter = BloomFilter::from_encoded(&EncodedBloomFilter::from_json(&json).unwrap()).unwrap();

        assert!(verify_golden(&filter, DEFAULT_DOCUMENT_PREFIX, &expected)
            .unwrap()
            .passed());
    }

    #[test]
    fn test_golden_results_are_not_trivially_satisfied() {
        let (encoded, expected) = golden_pair("bloom_filter_golden_10000");
        let mut bitmap = STANDARD.decode(&encoded.bits.bitmap).unwrap();
        bitmap.iter_mut().for_each(|b| *b = !*b);

        let flipped = BloomFilter::new(&bitmap, 7, 13).unwrap();
        let report = verify_golden(&flipped, DEFAULT_DOCUMENT_PREFIX, &expected).unwrap();
        assert!(report.mismatches.len() > 4_000);
    }

    // =============================================================================
    // DIGEST → PROBES
    // =============================================================================

    #[test]
    fn test_probes_follow_streamed_digest() {
        let document = format!("{}42", DEFAULT_DOCUMENT_PREFIX);

        let mut ctx = Md5Context::new();
        for chunk in document.as_bytes().chunks(5) {
            ctx.update(chunk);
        }
        let streamed = ctx.finalize();
        assert_eq!(streamed, md5_digest(document.as_bytes()));

        let filter = BloomFilter::new(&[0u8; 64], 3, 9).unwrap();
        let expected: Vec<u64> = HashSeeds::from_digest(&streamed)
            .positions(9, filter.size_bits())
            .collect();
        assert_eq!(filter.hash_positions(document.as_bytes()), expected);
    }

    #[test]
    fn test_single_probe_bitmap_matches_exactly_one_position() {
        let value = b"projects/project-1/databases/database-1/documents/coll/doc7";
        let seeds = HashSeeds::from_value(value);
        let size = 8 * 32 - 5;
        let pos = seeds.bit_index(0, size);

        let mut bitmap = vec![0u8; 32];
        bitmap[(pos / 8) as usize] |= 1 << (pos % 8);

        let filter = BloomFilter::new(&bitmap, 5, 1).unwrap();
        assert!(filter.might_contain(value));
        assert_eq!(filter.bits_set(), 1);
    }

    // =============================================================================
    // CONFIGURED LIMITS
    // =============================================================================

    #[test]
    fn test_config_limits_reject_golden_filter() {
        let (encoded, _) = golden_pair("bloom_filter_golden_10000");
        let bitmap = STANDARD.decode(&encoded.bits.bitmap).unwrap();

        let config = FilterConfig::default().with_max_bitmap_bytes(4096);
        let result = BloomFilter::new_with_config(&bitmap, 7, 13, &config);
        assert!(matches!(
            result,
            Err(FilterError::BitmapTooLarge { len: 11_983, max: 4096 })
        ));
    }

    #[test]
    fn test_variable_limits_reach_encoded_filter() {
        let (encoded, expected) = golden_pair("bloom_filter_golden_10000");

        let tight = FilterConfig::from_vars(|name| {
            (name == "BF_MAX_HASH_COUNT").then(|| "12".to_string())
        })
        .unwrap();
        assert!(matches!(
            BloomFilter::from_encoded_with_config(&encoded, &tight),
            Err(FilterError::HashCountTooLarge { count: 13, max: 12 })
        ));

        let exact = FilterConfig::from_vars(|name| match name {
            "BF_MAX_BITMAP_BYTES" => Some("11983".to_string()),
            "BF_MAX_HASH_COUNT" => Some("13".to_string()),
            _ => None,
        })
        .unwrap();
        let filter = BloomFilter::from_encoded_with_config(&encoded, &exact).unwrap();
        assert!(verify_golden(&filter, DEFAULT_DOCUMENT_PREFIX, &expected)
            .unwrap()
            .passed());
    }
}
