//! Command implementations
//!
//! Each command returns data; `main` decides how to print it. Filters are
//! built with the limits from `FilterConfig::from_env`.

use std::fs;
use std::path::Path;

use bf_01_md5_digest::{md5_digest, to_hex};
use bf_02_membership_filter::domain::BitSequence;
use bf_02_membership_filter::{
    verify_golden, BloomFilter, EncodedBloomFilter, FilterConfig, GoldenReport,
    MembershipTestResults,
};
use tracing::{debug, info};

use crate::error::CliError;

/// One answered query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryResult {
    pub value: String,
    pub might_contain: bool,
}

/// Lowercase hex MD5 of `text`
pub fn digest_text(text: &str) -> String {
    to_hex(&md5_digest(text.as_bytes()))
}

/// Lowercase hex MD5 of a file's contents
pub fn digest_file(path: &Path) -> Result<String, CliError> {
    let bytes = read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Digesting file");
    Ok(to_hex(&md5_digest(&bytes)))
}

/// Build a filter from a base64 bitmap and query each value
pub fn query(
    bitmap: &str,
    padding: i32,
    hash_count: i32,
    values: &[String],
) -> Result<Vec<QueryResult>, CliError> {
    let encoded = EncodedBloomFilter {
        bits: BitSequence {
            bitmap: bitmap.to_string(),
            padding,
        },
        hash_count,
    };
    let filter = BloomFilter::from_encoded_with_config(&encoded, &FilterConfig::from_env()?)?;
    debug!(
        size_bits = filter.size_bits(),
        hash_count = filter.hash_count(),
        "Filter loaded"
    );

    Ok(values
        .iter()
        .map(|value| QueryResult {
            value: value.clone(),
            might_contain: filter.might_contain(value.as_bytes()),
        })
        .collect())
}

/// Check a backend golden pair: encoded filter plus expected results
pub fn golden(filter_path: &Path, results_path: &Path, prefix: &str) -> Result<GoldenReport, CliError> {
    let encoded = EncodedBloomFilter::from_json(&read_to_string(filter_path)?)?;
    let expected = MembershipTestResults::from_json(&read_to_string(results_path)?)?;
    let filter = BloomFilter::from_encoded_with_config(&encoded, &FilterConfig::from_env()?)?;

    let _span = bf_telemetry::filter_span!("golden", documents = expected.membership_test_results.len())
        .entered();
    let report = verify_golden(&filter, prefix, &expected)?;
    info!(
        checked = report.checked,
        expected_positive = report.expected_positive,
        mismatches = report.mismatches.len(),
        "Golden replay finished"
    );
    Ok(report)
}

fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_to_string(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
