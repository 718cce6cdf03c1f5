//! Backend wire shape of a Bloom filter
//!
//! The backend ships filters as
//! `{ "bits": { "bitmap": "<base64>", "padding": 1 }, "hashCount": 16 }`,
//! omitting `padding` and `hashCount` when they are zero.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Bitmap plus padding, as sent by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitSequence {
    /// Standard base64 of the bitmap bytes
    #[serde(default)]
    pub bitmap: String,
    /// Unused trailing bits in the last byte
    #[serde(default)]
    pub padding: i32,
}

/// Encoded filter parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedBloomFilter {
    pub bits: BitSequence,
    #[serde(default)]
    pub hash_count: i32,
}

impl EncodedBloomFilter {
    /// Encode raw parameters (used by tests and the CLI)
    pub fn new(bitmap: &[u8], padding: i32, hash_count: i32) -> Self {
        Self {
            bits: BitSequence {
                bitmap: STANDARD.encode(bitmap),
                padding,
            },
            hash_count,
        }
    }

    /// Parse the JSON form
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode the base64 bitmap
    pub fn decode_bitmap(&self) -> Result<Vec<u8>, FilterError> {
        Ok(STANDARD.decode(self.bits.bitmap.as_bytes())?)
    }
}
