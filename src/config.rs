use log::Level;

use crate::motion::Easing;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Vertical scroll offset (CSS px) the nav must pass before it switches to
/// its scrolled style. The comparison is strict: an offset of exactly 50 is
/// still "unscrolled".
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Delay between rendering an element in its initial state and flipping it to
/// its target state, long enough for the browser to paint the first frame.
pub const MOUNT_TICK_MS: u32 = 20;

/// Fraction of an element that must be inside the viewport to count as
/// entered. Zero means any visible pixel.
pub const VIEWPORT_THRESHOLD: f64 = 0.0;

pub const DEFAULT_DURATION_SECS: f64 = 0.6;
pub const DEFAULT_EASING: Easing = Easing::EaseOut;

/// Curve shared by the nav and the mobile overlay.
pub const SIGNATURE_CURVE: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_starts_on_first_visible_pixel() {
        assert_eq!(VIEWPORT_THRESHOLD, 0.0);
    }
}
