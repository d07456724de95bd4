use std::time::Duration;

/// Discrete time unit of the machine. One tick is [`TICK_PERIOD`].
pub type Ticks = u32;

pub const TICK_PERIOD: Duration = Duration::from_millis(10);
pub const TICKS_PER_SECOND: Ticks = 100;

/// Formats a tick count as seconds with exactly two decimals (`157` -> `"1.57"`).
///
/// A tick is a hundredth of a second, so the conversion is exact in integers.
pub fn format_ticks(ticks: Ticks) -> String {
    format!(
        "{}.{:02}",
        ticks / TICKS_PER_SECOND,
        ticks % TICKS_PER_SECOND
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_ticks(0), "0.00");
        assert_eq!(format_ticks(7), "0.07");
        assert_eq!(format_ticks(157), "1.57");
        assert_eq!(format_ticks(200), "2.00");
        assert_eq!(format_ticks(1234), "12.34");
    }

    #[test]
    fn tick_period_matches_rate() {
        assert_eq!(TICK_PERIOD * TICKS_PER_SECOND, Duration::from_secs(1));
    }
}
