use crate::address::HexLayout;

/// Engine tunables: hex geometry and the scroll comfort band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct HexConfig {
    pub layout: HexLayout,
    pub follow: FollowBand,
}

impl HexConfig {
    pub fn new(layout: HexLayout, follow: FollowBand) -> Self {
        Self { layout, follow }
    }
}

/// Range of relative positions, in percent of the visible window, inside
/// which a followed point may drift before the viewport pans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FollowBand {
    low: i64,
    high: i64,
}

impl FollowBand {
    pub const DEFAULT_LOW: i64 = 25;
    pub const DEFAULT_HIGH: i64 = 75;

    pub const STANDARD: Self = Self {
        low: Self::DEFAULT_LOW,
        high: Self::DEFAULT_HIGH,
    };

    /// Creates a band; both ends must lie in `0..=100` with `low <= high`.
    pub const fn new(low: i64, high: i64) -> Option<Self> {
        if low < 0 || high > 100 || low > high {
            return None;
        }
        Some(Self { low, high })
    }

    pub const fn low(&self) -> i64 {
        self.low
    }

    pub const fn high(&self) -> i64 {
        self.high
    }

    pub const fn contains(&self, percent: i64) -> bool {
        percent >= self.low && percent <= self.high
    }
}

impl Default for FollowBand {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_is_quarter_to_three_quarters() {
        let band = FollowBand::default();
        assert_eq!((band.low(), band.high()), (25, 75));
        assert!(band.contains(25));
        assert!(band.contains(75));
        assert!(!band.contains(76));
    }

    #[test]
    fn band_rejects_inverted_or_out_of_range_bounds() {
        assert_eq!(FollowBand::new(80, 20), None);
        assert_eq!(FollowBand::new(-1, 50), None);
        assert_eq!(FollowBand::new(10, 101), None);
        assert!(FollowBand::new(40, 60).is_some());
    }
}
