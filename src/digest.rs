//! Turns a hex digest into the bishop's list of moves

use crate::error::WalkError;
use crate::types::DirectionCode;

/// Decode a hex digest into direction codes.
///
/// Every byte yields four codes. The bit pairs of a byte are read starting
/// with the lowest two bits, so `0xAB` (`10 10 10 11`) becomes
/// `[SE, SW, SW, SW]`. Bytes keep their order.
pub fn decode(digest: &str) -> Result<Vec<DirectionCode>, WalkError> {
    let bytes = hex::decode(digest).map_err(|e| WalkError::InvalidDigest {
        digest: digest.to_string(),
        reason: e.to_string(),
    })?;

    Ok(bytes
        .iter()
        .flat_map(|byte| (0..4).map(move |pair| DirectionCode::from_bits(byte >> (pair * 2))))
        .collect())
}
