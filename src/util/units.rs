//! Units formatting utilities
//!
//! Human-readable sizes and durations for log output.

use std::time::Duration;

use byte_unit::{Byte, UnitType};

/// Format a byte count with the closest decimal unit, matching dd's `KB`
///
/// # Examples
/// ```
/// use ddbench::util::units::format_block_size;
///
/// assert!(format_block_size(64_000).contains("KB"));
/// ```
pub fn format_block_size(bytes: u64) -> String {
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Decimal);
    format!("{:.1}", adjusted)
}

/// Format a wall-clock duration, truncated to milliseconds
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use ddbench::util::units::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_millis(1500)), "1s 500ms");
/// ```
pub fn format_elapsed(duration: Duration) -> String {
    let truncated = Duration::from_millis(duration.as_millis() as u64);
    humantime::format_duration(truncated).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_block_size() {
        assert!(format_block_size(1_000).contains("KB"));
        assert!(format_block_size(4_000_000).contains("MB"));
        assert!(format_block_size(1_000).starts_with('1'));
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_elapsed(Duration::from_micros(2_500)), "2ms");
        assert_eq!(format_elapsed(Duration::ZERO), "0s");
    }
}
