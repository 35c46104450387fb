/// Fixed-offset account data extraction
///
/// Helpers for pulling little-endian integer fields out of raw Solana
/// account buffers, plus conversion from the RPC's encoded account data
/// representations back to raw bytes.

use base64::{engine::general_purpose, Engine as _};
use solana_account_decoder::{UiAccountData, UiAccountEncoding};

/// Read a little-endian u64 at `offset`.
pub fn read_u64_le(data: &[u8], offset: usize) -> Result<u64, String> {
    let end = offset
        .checked_add(8)
        .ok_or_else(|| "Offset overflow".to_string())?;
    if data.len() < end {
        return Err(format!(
            "Data too short for u64 at offset {}: {} bytes",
            offset,
            data.len()
        ));
    }
    Ok(u64::from_le_bytes(
        data[offset..end].try_into().map_err(|_| "Invalid u64 bytes")?,
    ))
}

/// Read a little-endian u32 at `offset`.
pub fn read_u32_le(data: &[u8], offset: usize) -> Result<u32, String> {
    let end = offset
        .checked_add(4)
        .ok_or_else(|| "Offset overflow".to_string())?;
    if data.len() < end {
        return Err(format!(
            "Data too short for u32 at offset {}: {} bytes",
            offset,
            data.len()
        ));
    }
    Ok(u32::from_le_bytes(
        data[offset..end].try_into().map_err(|_| "Invalid u32 bytes")?,
    ))
}

/// Extract the raw amount from an SPL token account.
///
/// Token account layout: mint(32) + owner(32) + amount(8) + ...
pub fn decode_token_account_amount(data: &[u8]) -> Result<u64, String> {
    if data.len() < crate::constants::TOKEN_ACCOUNT_MIN_LEN {
        return Err("Invalid token account data length".to_string());
    }
    read_u64_le(data, crate::constants::TOKEN_AMOUNT_OFFSET)
}

/// Extract the shares field from a user stake record.
pub fn extract_user_shares(data: &[u8], offset: usize) -> Result<u64, String> {
    read_u64_le(data, offset)
}

/// Extract (total_staked, total_shares) from the global pool state.
pub fn extract_global_totals(
    data: &[u8],
    staked_offset: usize,
    shares_offset: usize,
) -> Result<(u64, u64), String> {
    let total_staked = read_u64_le(data, staked_offset)?;
    let total_shares = read_u64_le(data, shares_offset)?;
    Ok((total_staked, total_shares))
}

/// Decode base64 after restoring any stripped padding.
///
/// Some RPC responses arrive without trailing `=` padding, which the strict
/// decoder rejects.
pub fn decode_base64_padded(encoded: &str) -> Result<Vec<u8>, String> {
    let mut repaired = encoded.to_string();
    let remainder = repaired.len() % 4;
    if remainder > 0 {
        repaired.push_str(&"=".repeat(4 - remainder));
    }
    general_purpose::STANDARD
        .decode(&repaired)
        .map_err(|e| format!("Base64 decode failed: {}", e))
}

/// Convert `UiAccountData` to raw bytes.
///
/// Handles base64 (with padding repair) and base58 representations.
/// jsonParsed data carries no raw buffer and is rejected so the caller can
/// skip the account with a diagnostic.
pub fn account_data_bytes(data: &UiAccountData) -> Result<Vec<u8>, String> {
    match data {
        UiAccountData::Binary(blob, encoding) => match encoding {
            UiAccountEncoding::Base64 => decode_base64_padded(blob),
            UiAccountEncoding::Base58 | UiAccountEncoding::Binary => bs58::decode(blob)
                .into_vec()
                .map_err(|e| format!("Base58 decode failed: {}", e)),
            other => Err(format!("Unsupported account encoding: {:?}", other)),
        },
        UiAccountData::LegacyBinary(blob) => bs58::decode(blob)
            .into_vec()
            .map_err(|e| format!("Base58 decode failed: {}", e)),
        UiAccountData::Json(_) => Err("jsonParsed account data has no raw bytes".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{TOKEN_ACCOUNT_MIN_LEN, TOKEN_AMOUNT_OFFSET};

    fn token_account_with_amount(amount: u64) -> Vec<u8> {
        let mut data = vec![0u8; 165];
        data[TOKEN_AMOUNT_OFFSET..TOKEN_AMOUNT_OFFSET + 8]
            .copy_from_slice(&amount.to_le_bytes());
        data
    }

    #[test]
    fn token_amount_roundtrip_at_offset_64() {
        let data = token_account_with_amount(123_456_789_000);
        assert_eq!(decode_token_account_amount(&data).unwrap(), 123_456_789_000);
    }

    #[test]
    fn undersized_token_account_is_rejected() {
        let data = vec![0u8; TOKEN_ACCOUNT_MIN_LEN - 1];
        assert!(decode_token_account_amount(&data).is_err());
    }

    #[test]
    fn read_u64_le_matches_encoded_value() {
        let mut data = vec![0u8; 16];
        data[4..12].copy_from_slice(&0xDEAD_BEEF_u64.to_le_bytes());
        assert_eq!(read_u64_le(&data, 4).unwrap(), 0xDEAD_BEEF);
        assert!(read_u64_le(&data, 9).is_err());
    }

    #[test]
    fn read_u32_le_matches_encoded_value() {
        let mut data = vec![0u8; 8];
        data[2..6].copy_from_slice(&7_u32.to_le_bytes());
        assert_eq!(read_u32_le(&data, 2).unwrap(), 7);
        assert!(read_u32_le(&data, 5).is_err());
    }

    #[test]
    fn base64_padding_is_repaired() {
        // "QQ" is "A" with the trailing "==" stripped
        assert_eq!(decode_base64_padded("QQ").unwrap(), b"A");
        assert_eq!(decode_base64_padded("QQ==").unwrap(), b"A");
    }

    #[test]
    fn account_data_bytes_decodes_unpadded_base64() {
        let raw = token_account_with_amount(42);
        let mut encoded = general_purpose::STANDARD.encode(&raw);
        while encoded.ends_with('=') {
            encoded.pop();
        }
        let data = UiAccountData::Binary(encoded, UiAccountEncoding::Base64);
        assert_eq!(account_data_bytes(&data).unwrap(), raw);
    }

    #[test]
    fn account_data_bytes_rejects_json_parsed() {
        let parsed = solana_account_decoder::parse_account_data::ParsedAccount {
            program: "spl-token".to_string(),
            parsed: serde_json::json!({}),
            space: 165,
        };
        assert!(account_data_bytes(&UiAccountData::Json(parsed)).is_err());
    }

    #[test]
    fn global_totals_extracted_from_fixture_buffer() {
        let mut data = vec![0u8; 3624];
        data[3616..3624].copy_from_slice(&1_000_000_000u64.to_le_bytes());
        data[1344..1352].copy_from_slice(&500_000_000u64.to_le_bytes());
        let (staked, shares) = extract_global_totals(&data, 3616, 1344).unwrap();
        assert_eq!(staked, 1_000_000_000);
        assert_eq!(shares, 500_000_000);
    }
}
