use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;

/// How `expires-in` is written on the wire.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DurationFormat {
    /// Whole seconds, sub-second part truncated.
    #[default]
    Seconds,
    /// Whole nanoseconds, the form legacy clients send.
    Nanoseconds,
}

impl DurationFormat {
    pub fn to_wire(&self, duration: Duration) -> u64 {
        match self {
            DurationFormat::Seconds => duration.as_secs(),
            // saturates instead of wrapping past ~584 years
            DurationFormat::Nanoseconds => u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_truncate_fraction() {
        assert_eq!(DurationFormat::Seconds.to_wire(Duration::from_millis(90_999)), 90);
        assert_eq!(DurationFormat::Seconds.to_wire(Duration::ZERO), 0);
    }

    #[test]
    fn nanoseconds_keep_full_precision() {
        assert_eq!(
            DurationFormat::Nanoseconds.to_wire(Duration::from_secs(3600)),
            3_600_000_000_000
        );
    }

    #[test]
    fn nanoseconds_saturate() {
        assert_eq!(DurationFormat::Nanoseconds.to_wire(Duration::MAX), u64::MAX);
    }
}
