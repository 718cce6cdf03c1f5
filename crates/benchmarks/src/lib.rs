//! Benchmark utilities for the Bloom filter workspace
pub mod utils {
    use bf_02_membership_filter::{HashSeeds, DEFAULT_DOCUMENT_PREFIX};
    use rand::{Rng, SeedableRng};

    /// Document names `<prefix>0..<prefix>count`, as in the backend golden files
    pub fn document_names(count: usize) -> Vec<Vec<u8>> {
        (0..count)
            .map(|i| format!("{}{}", DEFAULT_DOCUMENT_PREFIX, i).into_bytes())
            .collect()
    }

    /// Reproducible random byte strings of the given length
    pub fn random_values(count: usize, len: usize, seed: u64) -> Vec<Vec<u8>> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let mut value = vec![0u8; len];
                rng.fill(value.as_mut_slice());
                value
            })
            .collect()
    }

    /// Build a bitmap containing `values` with the same probe scheme the backend uses
    pub fn build_bitmap(values: &[Vec<u8>], bytes: usize, hash_count: u32) -> Vec<u8> {
        let size = bytes as u64 * 8;
        let mut bitmap = vec![0u8; bytes];
        if size == 0 {
            return bitmap;
        }
        for value in values {
            for pos in HashSeeds::from_value(value).positions(hash_count, size) {
                bitmap[(pos / 8) as usize] |= 1 << (pos % 8);
            }
        }
        bitmap
    }
}
