//! Pointer-tilt math shared by the photo frame and the 3D cards.

/// Angle divisor for the photo frame (gentler tilt).
pub const FRAME_DIVISOR: f64 = 20.0;

/// Angle divisor for cards.
pub const CARD_DIVISOR: f64 = 15.0;

/// Transform applied to the frame when the pointer leaves its wrapper.
pub const FRAME_REST: &str = "rotateX(0) rotateY(0)";

/// Rotation angles in degrees for a pointer at (`px`, `py`) over an element
/// centered at (`cx`, `cy`). Vertical offset tips the element away on X,
/// horizontal offset turns it on Y (negated so the edge under the pointer
/// comes forward).
pub fn tilt_angles(px: f64, py: f64, cx: f64, cy: f64, divisor: f64) -> (f64, f64) {
    let rx = (py - cy) / divisor;
    let ry = -(px - cx) / divisor;
    (rx, ry)
}

pub fn frame_transform(rx: f64, ry: f64) -> String {
    format!("rotateX({rx}deg) rotateY({ry}deg)")
}

/// Card transform adds a constant lift while tilted.
pub fn card_transform(rx: f64, ry: f64) -> String {
    format!("translateY(-10px) rotateX({rx}deg) rotateY({ry}deg)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_center_gives_no_rotation() {
        let (rx, ry) = tilt_angles(400.0, 300.0, 400.0, 300.0, FRAME_DIVISOR);
        assert_eq!((rx, ry), (0.0, 0.0));
    }

    #[test]
    fn pointer_below_center_tips_forward() {
        let (rx, _) = tilt_angles(400.0, 340.0, 400.0, 300.0, FRAME_DIVISOR);
        assert!((rx - 2.0).abs() < 1e-12);
    }

    #[test]
    fn pointer_right_of_center_turns_left() {
        let (_, ry) = tilt_angles(430.0, 300.0, 400.0, 300.0, CARD_DIVISOR);
        assert!((ry + 2.0).abs() < 1e-12);
    }

    #[test]
    fn card_divisor_tilts_harder_than_frame() {
        let (frame_rx, _) = tilt_angles(0.0, 60.0, 0.0, 0.0, FRAME_DIVISOR);
        let (card_rx, _) = tilt_angles(0.0, 60.0, 0.0, 0.0, CARD_DIVISOR);
        assert!(card_rx > frame_rx);
    }

    #[test]
    fn card_transform_carries_the_lift() {
        let css = card_transform(1.5, -2.0);
        assert!(css.starts_with("translateY(-10px)"));
        assert!(css.contains("rotateX(1.5deg)"));
        assert!(css.contains("rotateY(-2deg)"));
    }
}
