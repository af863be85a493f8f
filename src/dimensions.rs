use crate::foundation::core::{Limits, Ratio};

/// Pixels per ratio unit when no shrinking is needed.
pub const DEFAULT_BASE: u32 = 100;

/// Scales `ratio` by `base` pixels per unit, shrinking `base` so neither side exceeds the
/// upper width/height limits.
///
/// The width check runs first and the height check sees the already reduced base, so the
/// tighter axis governs both sides. Results below the lower limits (including 0) are returned
/// as-is; callers range-check them.
pub fn dimensions_from_ratio(ratio: Ratio, base: u32, limits: &Limits) -> (u32, u32) {
    let max_w = upper_u32(limits.width.upper);
    let max_h = upper_u32(limits.height.upper);

    let mut base = u64::from(base);
    if base * u64::from(ratio.width) > u64::from(max_w) {
        base = u64::from(max_w / ratio.width.max(1));
    }
    if base * u64::from(ratio.height) > u64::from(max_h) {
        base = u64::from(max_h / ratio.height.max(1));
    }

    // `base * component` is now bounded by the u32 limits above.
    (
        (base * u64::from(ratio.width)) as u32,
        (base * u64::from(ratio.height)) as u32,
    )
}

fn upper_u32(v: i64) -> u32 {
    v.clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(width: u32, height: u32) -> Ratio {
        Ratio { width, height }
    }

    #[test]
    fn no_shrink_when_under_limits() {
        let l = Limits::default();
        assert_eq!(dimensions_from_ratio(ratio(16, 9), 100, &l), (1600, 900));
        assert_eq!(dimensions_from_ratio(ratio(1, 1), 100, &l), (100, 100));
        assert_eq!(dimensions_from_ratio(ratio(4, 3), DEFAULT_BASE, &l), (400, 300));
    }

    #[test]
    fn shrink_only_when_a_side_exceeds_upper() {
        let l = Limits::default();
        assert_eq!(dimensions_from_ratio(ratio(30, 1), 100, &l), (3000, 100));
        assert_eq!(dimensions_from_ratio(ratio(1, 30), 100, &l), (100, 3000));
    }

    #[test]
    fn width_shrink_propagates_to_height() {
        let l = Limits::default();
        assert_eq!(dimensions_from_ratio(ratio(30, 1), 200, &l), (3990, 133));
    }

    #[test]
    fn height_shrink_uses_reduced_base() {
        let l = Limits::default();
        assert_eq!(dimensions_from_ratio(ratio(1, 30), 200, &l), (133, 3990));
        assert_eq!(dimensions_from_ratio(ratio(25, 30), 200, &l), (3325, 3990));
    }

    #[test]
    fn exact_limit_is_kept() {
        let l = Limits::default();
        assert_eq!(dimensions_from_ratio(ratio(40, 20), 100, &l), (4000, 2000));
    }

    #[test]
    fn tiny_base_is_left_for_range_check() {
        let l = Limits::default();
        assert_eq!(dimensions_from_ratio(ratio(16, 9), 0, &l), (0, 0));
        assert_eq!(dimensions_from_ratio(ratio(30, 1), 1, &l), (30, 1));
    }
}
