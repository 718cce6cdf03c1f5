//! One-shot digest helpers.

use crate::constants::DIGEST_LENGTH;
use crate::context::Md5Context;
use crate::errors::DigestError;

/// MD5 digest output (128-bit).
pub type Md5Digest = [u8; DIGEST_LENGTH];

/// Digest `data` (one-shot).
pub fn md5_digest(data: &[u8]) -> Md5Digest {
    let mut ctx = Md5Context::new();
    ctx.update(data);
    ctx.finalize()
}

/// Digest the concatenation of several inputs.
pub fn md5_digest_many(inputs: &[&[u8]]) -> Md5Digest {
    let mut ctx = Md5Context::new();
    for input in inputs {
        ctx.update(input);
    }
    ctx.finalize()
}

/// Lowercase hex rendering, e.g. `d41d8cd98f00b204e9800998ecf8427e`.
pub fn to_hex(digest: &Md5Digest) -> String {
    hex::encode(digest)
}

/// Parse a 32-character hex string (either case) into a digest.
pub fn from_hex(s: &str) -> Result<Md5Digest, DigestError> {
    if s.len() != DIGEST_LENGTH * 2 {
        return Err(DigestError::InvalidHexLength {
            expected: DIGEST_LENGTH * 2,
            actual: s.len(),
        });
    }
    let mut out = [0u8; DIGEST_LENGTH];
    hex::decode_to_slice(s, &mut out)?;
    Ok(out)
}
