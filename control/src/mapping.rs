//! Linear mapping of raw converter readings.

/// Highest value returned by the 10-bit analog converter.
pub const RAW_MAX: i32 = 1023;

/// Distance of either end of the centered range from the rest position.
pub const HALF_RANGE: i32 = 512;

/// Map `value` linearly from one range to another.
///
/// Integer arithmetic with the division truncating towards zero, so the
/// results match the classic microcontroller `map` routine bit by bit. The
/// input range must not be empty.
#[must_use]
pub fn map_range(value: i32, from: (i32, i32), to: (i32, i32)) -> i32 {
    (value - from.0) * (to.1 - to.0) / (from.1 - from.0) + to.0
}

/// Translate a raw reading into a value centered around the rest position.
///
/// Readings in `[0, 1023]` land in `[-512, 512]`.
#[must_use]
pub fn center(raw: u16) -> i32 {
    map_range(
        i32::from(raw),
        (0, RAW_MAX),
        (-HALF_RANGE, HALF_RANGE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_reading_is_at_ends_it_maps_to_ends_of_centered_range() {
        assert_eq!(center(0), -512);
        assert_eq!(center(1023), 512);
    }

    #[test]
    fn when_reading_is_in_the_middle_it_maps_around_zero() {
        assert_eq!(center(511), -1);
        assert_eq!(center(512), 0);
        assert_eq!(center(513), 1);
    }

    #[test]
    fn when_result_is_fractional_it_truncates_towards_zero() {
        assert_eq!(map_range(1, (0, 3), (0, 2)), 0);
        assert_eq!(map_range(2, (0, 3), (0, 2)), 1);
        assert_eq!(map_range(1, (0, 3), (-2, 0)), -2);
    }

    #[test]
    fn when_target_range_is_reversed_it_inverts() {
        assert_eq!(map_range(0, (0, 10), (10, 0)), 10);
        assert_eq!(map_range(10, (0, 10), (10, 0)), 0);
    }
}
