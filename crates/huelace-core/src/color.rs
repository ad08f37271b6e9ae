//! Color values and the modular arithmetic shared by all transforms.

use derive_more::Display;

/// Number of distinct color indices a puzzle plays with.
///
/// Every puzzle starts at the minimum of two colors and the player can raise
/// the count up to nine at runtime. Changing the count invalidates existing
/// buffer contents, so the owning puzzle re-scrambles immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct ColorCount(u8);

impl ColorCount {
    /// The smallest playable color count.
    pub const MIN: Self = Self(2);

    /// The largest playable color count.
    pub const MAX: Self = Self(9);

    /// Creates a color count, returning `None` when `value` is outside
    /// `[2, 9]`.
    ///
    /// # Example
    ///
    /// ```
    /// use huelace_core::ColorCount;
    ///
    /// assert_eq!(ColorCount::new(4).unwrap().get(), 4);
    /// assert_eq!(ColorCount::new(1), None);
    /// assert_eq!(ColorCount::new(10), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a color count, clamping `value` into `[2, 9]`.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the count as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns whether `color` is a valid index under this count.
    #[must_use]
    pub const fn contains(self, color: ColorIndex) -> bool {
        color.get() < self.0
    }
}

impl Default for ColorCount {
    /// Two colors, the count every puzzle starts with.
    fn default() -> Self {
        Self::MIN
    }
}

/// A single cell's color, an index in `[0, color_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Color index zero, the value every freshly built cell holds.
    pub const ZERO: Self = Self(0);

    /// Creates a color index.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not below [`ColorCount::MAX`].
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(value < ColorCount::MAX.get());
        Self(value)
    }

    /// Returns the index as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns this color advanced by `magnitude` steps, wrapping modulo
    /// `count`.
    ///
    /// Every transform variant advances cells through this single operation,
    /// so a value in `[0, count)` stays in `[0, count)` for any magnitude.
    ///
    /// # Example
    ///
    /// ```
    /// use huelace_core::{ColorCount, ColorIndex};
    ///
    /// let count = ColorCount::new(3).unwrap();
    /// let color = ColorIndex::new(2);
    /// assert_eq!(color.cycled(1, count).get(), 0);
    /// assert_eq!(color.cycled(3, count), color);
    /// ```
    #[must_use]
    pub const fn cycled(self, magnitude: u8, count: ColorCount) -> Self {
        let count = count.get();
        Self((self.0 % count + magnitude % count) % count)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_count_bounds() {
        assert_eq!(ColorCount::new(2), Some(ColorCount::MIN));
        assert_eq!(ColorCount::new(9), Some(ColorCount::MAX));
        assert_eq!(ColorCount::new(0), None);
        assert_eq!(ColorCount::clamped(0), ColorCount::MIN);
        assert_eq!(ColorCount::clamped(200), ColorCount::MAX);
        assert_eq!(ColorCount::clamped(5).get(), 5);
    }

    #[test]
    fn test_contains() {
        let count = ColorCount::new(3).unwrap();
        assert!(count.contains(ColorIndex::new(2)));
        assert!(!count.contains(ColorIndex::new(3)));
    }

    proptest! {
        #[test]
        fn prop_cycled_stays_in_range(
            value in 0u8..9,
            magnitude in 0u8..=u8::MAX,
            count in 2u8..=9,
        ) {
            let count = ColorCount::new(count).unwrap();
            let cycled = ColorIndex::new(value).cycled(magnitude, count);
            prop_assert!(count.contains(cycled));
        }

        #[test]
        fn prop_cycled_inverse_restores(
            value in 0u8..9,
            magnitude in 0u8..9,
            count in 2u8..=9,
        ) {
            let count = ColorCount::new(count).unwrap();
            let value = ColorIndex::new(value % count.get());
            let magnitude = magnitude % count.get();
            let there = value.cycled(magnitude, count);
            let back = there.cycled(count.get() - magnitude, count);
            prop_assert_eq!(back, value);
        }
    }
}
