/// Reward accrual heuristics
///
/// The staking program updates balances lazily, so the displayed stake can
/// lag true accrual. These helpers estimate that lag by brute-force scanning
/// the raw stake buffers for anything that looks like a recent unix
/// timestamp, then project pending rewards with a flat annual rate.
///
/// This is reverse-engineering guesswork, not a documented field lookup: the
/// scan can match unrelated integers that happen to fall in the plausible
/// window, and the projection has no on-chain confirmation.

use crate::constants::{SECONDS_PER_DAY, TIMESTAMP_SCAN_HORIZON_SECS};

/// Scan every 8-byte and 4-byte little-endian window of `data`, returning
/// the maximum value inside `[min_ts, max_ts)`, or `None` when nothing in
/// the buffer falls in range.
pub fn scan_latest_timestamp(data: &[u8], min_ts: u64, max_ts: u64) -> Option<u64> {
    let mut best: Option<u64> = None;

    let mut consider = |value: u64| {
        if value >= min_ts && value < max_ts && best.map_or(true, |b| value > b) {
            best = Some(value);
        }
    };

    if data.len() >= 8 {
        for window in data.windows(8) {
            let value = u64::from_le_bytes(window.try_into().unwrap());
            consider(value);
        }
    }
    if data.len() >= 4 {
        for window in data.windows(4) {
            let value = u32::from_le_bytes(window.try_into().unwrap()) as u64;
            consider(value);
        }
    }

    best
}

/// Estimate how many days the stake record lags behind `now`.
///
/// Scans both the user record and the global state for the most recent
/// plausible timestamp; future-dated values clamp to zero elapsed days.
/// Falls back to `fallback_lag_days` when neither buffer yields a match.
pub fn estimate_update_lag_days(
    record_data: &[u8],
    global_data: &[u8],
    now: i64,
    scan_floor: i64,
    fallback_lag_days: f64,
) -> f64 {
    let min_ts = scan_floor.max(0) as u64;
    let max_ts = now.saturating_add(TIMESTAMP_SCAN_HORIZON_SECS).max(0) as u64;

    let record_ts = scan_latest_timestamp(record_data, min_ts, max_ts);
    let global_ts = scan_latest_timestamp(global_data, min_ts, max_ts);

    match record_ts.into_iter().chain(global_ts).max() {
        Some(ts) => {
            let elapsed = (now - ts as i64).max(0);
            elapsed as f64 / SECONDS_PER_DAY
        }
        None => fallback_lag_days,
    }
}

/// Project pending rewards from a flat annual rate:
/// `pending = staked * rate * (days / 365)`. Illustrative only.
pub fn project_pending_rewards(staked: f64, annual_rate: f64, days_elapsed: f64) -> f64 {
    staked * annual_rate * (days_elapsed / 365.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_TS: u64 = 1_735_689_600; // 2025-01-01
    const MAX_TS: u64 = 1_790_000_000;

    fn buffer_with_u64(values: &[(usize, u64)]) -> Vec<u8> {
        let mut data = vec![0u8; 128];
        for &(offset, value) in values {
            data[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
        }
        data
    }

    #[test]
    fn single_in_range_value_is_found() {
        let data = buffer_with_u64(&[(40, 1_760_000_000)]);
        assert_eq!(
            scan_latest_timestamp(&data, MIN_TS, MAX_TS),
            Some(1_760_000_000)
        );
    }

    #[test]
    fn maximum_of_multiple_in_range_values_wins() {
        let data = buffer_with_u64(&[(8, 1_750_000_000), (40, 1_770_000_000), (72, 1_740_000_000)]);
        assert_eq!(
            scan_latest_timestamp(&data, MIN_TS, MAX_TS),
            Some(1_770_000_000)
        );
    }

    #[test]
    fn empty_buffer_yields_none() {
        let data = vec![0u8; 64];
        assert_eq!(scan_latest_timestamp(&data, MIN_TS, MAX_TS), None);
        assert_eq!(scan_latest_timestamp(&[], MIN_TS, MAX_TS), None);
    }

    #[test]
    fn upper_bound_is_exclusive() {
        let data = buffer_with_u64(&[(16, MAX_TS)]);
        assert_eq!(scan_latest_timestamp(&data, MIN_TS, MAX_TS), None);
    }

    #[test]
    fn four_byte_windows_are_scanned() {
        let mut data = vec![0u8; 32];
        // 1_760_000_000 fits in a u32; place it so no 8-byte window reads it whole
        data[28..32].copy_from_slice(&1_760_000_000u32.to_le_bytes());
        assert_eq!(
            scan_latest_timestamp(&data, MIN_TS, MAX_TS),
            Some(1_760_000_000)
        );
    }

    #[test]
    fn lag_estimate_uses_detected_timestamp() {
        let now: i64 = 1_770_000_000;
        let record = buffer_with_u64(&[(40, (now - 86_400) as u64)]);
        let days = estimate_update_lag_days(&record, &[], now, MIN_TS as i64, 2.0);
        assert_eq!(days, 1.0);
    }

    #[test]
    fn future_timestamp_clamps_to_zero_days() {
        let now: i64 = 1_770_000_000;
        let record = buffer_with_u64(&[(40, (now + 3_600) as u64)]);
        let days = estimate_update_lag_days(&record, &[], now, MIN_TS as i64, 2.0);
        assert_eq!(days, 0.0);
    }

    #[test]
    fn missing_timestamp_falls_back_to_constant_lag() {
        let days = estimate_update_lag_days(&[0u8; 64], &[0u8; 64], 1_770_000_000, MIN_TS as i64, 2.0);
        assert_eq!(days, 2.0);
    }

    #[test]
    fn projection_follows_flat_rate_formula() {
        assert_eq!(project_pending_rewards(1000.0, 0.08, 0.0), 0.0);
        assert_eq!(
            project_pending_rewards(250.0, 0.08, 73.0),
            250.0 * 0.08 * (73.0 / 365.0)
        );
        assert_eq!(project_pending_rewards(0.0, 0.08, 10.0), 0.0);
    }
}
