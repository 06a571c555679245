// src/utils.rs

/// Converts a point in desktop coordinates to coordinates relative to the
/// window's client area, given the client area's desktop position.
pub fn desktop_to_window(point: (i32, i32), client_origin: (i32, i32)) -> (i32, i32) {
    (point.0 - client_origin.0, point.1 - client_origin.1)
}

/// Rounds a floating point coordinate to the integer pixel it falls in.
pub fn to_pixel(value: f64) -> i32 {
    value.round() as i32
}

/// Picks the monitor to go fullscreen on: the one showing the current
/// window, else the primary, else any.
pub fn preferred_monitor<M>(
    current: Option<M>,
    primary: Option<M>,
    mut available: impl Iterator<Item = M>,
) -> Option<M> {
    current.or(primary).or_else(|| available.next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_point_is_relative_to_client_origin() {
        assert_eq!(desktop_to_window((100, 100), (40, 60)), (60, 40));
        assert_eq!(desktop_to_window((100, 100), (300, 200)), (-200, -100));
    }

    #[test]
    fn coordinates_round_to_nearest_pixel() {
        assert_eq!(to_pixel(10.4), 10);
        assert_eq!(to_pixel(10.6), 11);
        assert_eq!(to_pixel(-3.7), -4);
    }

    #[test]
    fn fullscreen_prefers_the_current_monitor() {
        assert_eq!(preferred_monitor(Some(2), Some(1), [3].into_iter()), Some(2));
        assert_eq!(preferred_monitor(None, Some(1), [3].into_iter()), Some(1));
        assert_eq!(preferred_monitor(None, None, [3, 4].into_iter()), Some(3));
        assert_eq!(preferred_monitor::<u8>(None, None, std::iter::empty()), None);
    }
}
