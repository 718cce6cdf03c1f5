//! Golden-file verification
//!
//! The backend publishes, next to each encoded filter, a string of `'0'`/`'1'`
//! giving the expected `might_contain` result for the documents
//! `<prefix>0`, `<prefix>1`, ... This module replays those documents against
//! a filter and reports every disagreement.

use serde::{Deserialize, Serialize};

use super::bloom_filter::BloomFilter;
use crate::error::FilterError;

/// Document-name prefix used by the backend's golden files
pub const DEFAULT_DOCUMENT_PREFIX: &str =
    "projects/project-1/databases/database-1/documents/coll/doc";

/// Expected results file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipTestResults {
    pub membership_test_results: String,
}

impl MembershipTestResults {
    /// Parse the JSON form
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Expected result per document index
    pub fn expected(&self) -> Result<Vec<bool>, FilterError> {
        self.membership_test_results
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                '1' => Ok(true),
                '0' => Ok(false),
                other => Err(FilterError::InvalidArgument(format!(
                    "unexpected character {:?} at index {} in membership results",
                    other, i
                ))),
            })
            .collect()
    }
}

/// One document whose result disagreed with the golden file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoldenMismatch {
    pub index: usize,
    pub document: String,
    pub expected: bool,
    pub actual: bool,
}

/// Outcome of a golden replay
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoldenReport {
    /// Documents checked
    pub checked: usize,
    /// Documents expected to be contained
    pub expected_positive: usize,
    pub mismatches: Vec<GoldenMismatch>,
}

impl GoldenReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Replay `<prefix><i>` for every expected result
pub fn verify_golden(
    filter: &BloomFilter,
    prefix: &str,
    expected: &MembershipTestResults,
) -> Result<GoldenReport, FilterError> {
    let expected = expected.expected()?;
    let mut report = GoldenReport {
        checked: expected.len(),
        ..Default::default()
    };

    for (index, &want) in expected.iter().enumerate() {
        let document = format!("{}{}", prefix, index);
        let actual = filter.might_contain(document.as_bytes());
        if want {
            report.expected_positive += 1;
        }
        if actual != want {
            report.mismatches.push(GoldenMismatch {
                index,
                document,
                expected: want,
                actual,
            });
        }
    }

    Ok(report)
}
