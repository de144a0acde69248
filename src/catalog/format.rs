/// Format whole seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format elapsed playback time as `m:ss`.
///
/// Elapsed time comes from `seek` and is not clamped, so negative and
/// non-finite values render as `0:00`.
pub fn format_elapsed(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return format_duration(0);
    }
    format_duration(seconds.floor().min(f64::from(u32::MAX)) as u32)
}

/// Compact play count: `1.2M`, `12.4K`, or the plain number below 1000.
///
/// The one decimal is rounded half up, so 1_250 reads `1.3K`.
pub fn format_plays(plays: u64) -> String {
    if plays >= 1_000_000 {
        format!("{:.1}M", one_decimal(plays as f64 / 1_000_000.0))
    } else if plays >= 1_000 {
        format!("{:.1}K", one_decimal(plays as f64 / 1_000.0))
    } else {
        plays.to_string()
    }
}

// `{:.1}` alone rounds exact halves to even.
fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
