//! Equal-width partitions of the ecliptic circle.
//!
//! Sector `k` of an `n`-way partition covers
//! `[lower_bound_deg(k), lower_bound_deg(k + 1))`, with each bound computed
//! as `360k/n`. An angle equal to a bound belongs to the sector that bound
//! opens. The closed form `floor(a * n / 360)` can land one sector off near
//! a bound, so [`AngularPartition::index_of`] checks its guess against the
//! bounds themselves.

use crate::util::normalize_360;

/// `count` equal sectors covering [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AngularPartition {
    count: u16,
}

/// 12 rashis of 30 deg.
pub const RASHI_PARTITION: AngularPartition = AngularPartition::new(12);
/// 27 nakshatras of 13 deg 20'.
pub const NAKSHATRA_PARTITION: AngularPartition = AngularPartition::new(27);
/// 27 yogas of 13 deg 20'.
pub const YOGA_PARTITION: AngularPartition = AngularPartition::new(27);
/// 108 nakshatra padas of 3 deg 20'.
pub const PADA_PARTITION: AngularPartition = AngularPartition::new(108);

impl AngularPartition {
    /// A partition into `count` sectors. `count` must be non-zero.
    pub const fn new(count: u16) -> Self {
        assert!(count > 0, "partition needs at least one sector");
        Self { count }
    }

    pub const fn count(self) -> u16 {
        self.count
    }

    /// Width of one sector in degrees.
    pub fn span_deg(self) -> f64 {
        360.0 / self.count as f64
    }

    /// Start of sector `k` in degrees, from the exact fraction 360k/n.
    pub fn lower_bound_deg(self, k: u16) -> f64 {
        360.0 * k as f64 / self.count as f64
    }

    /// End of sector `k` in degrees (exclusive; 360 for the last sector).
    pub fn upper_bound_deg(self, k: u16) -> f64 {
        360.0 * (k as f64 + 1.0) / self.count as f64
    }

    /// Closed-form sector index of `angle_deg` (normalized first).
    pub fn index_of(self, angle_deg: f64) -> u16 {
        let a = normalize_360(angle_deg);
        let last = self.count - 1;
        let mut idx = ((a * self.count as f64 / 360.0).floor() as u16).min(last);
        if idx < last && a >= self.lower_bound_deg(idx + 1) {
            idx += 1;
        } else if idx > 0 && a < self.lower_bound_deg(idx) {
            idx -= 1;
        }
        idx
    }

    /// Sector index by walking the bounds in order.
    pub fn scan_index_of(self, angle_deg: f64) -> u16 {
        let a = normalize_360(angle_deg);
        let last = self.count - 1;
        (0..last)
            .find(|&k| a >= self.lower_bound_deg(k) && a < self.upper_bound_deg(k))
            .unwrap_or(last)
    }

    /// Degrees into sector `k` for the normalized angle.
    pub fn offset_in_sector(self, angle_deg: f64, k: u16) -> f64 {
        (normalize_360(angle_deg) - self.lower_bound_deg(k)).max(0.0)
    }
}
