//! Section-to-dot mapping and the navbar scroll threshold.

/// Page sections in document order; index matches the dot order.
pub const SECTION_IDS: [&str; 6] = [
    "hero",
    "about",
    "experience",
    "skills",
    "education",
    "contact",
];

/// Scroll offset in pixels beyond which the navbar condenses.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 80.0;

/// Dot index for a section id, `None` for anything not in the fixed list.
pub fn dot_index_for(id: &str) -> Option<usize> {
    SECTION_IDS.iter().position(|&s| s == id)
}

/// Whether the navbar should carry the `scrolled` class at this offset.
/// Strictly greater than the threshold; at the threshold the class is off.
pub fn navbar_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_maps_to_its_position() {
        for (i, id) in SECTION_IDS.iter().enumerate() {
            assert_eq!(dot_index_for(id), Some(i));
        }
    }

    #[test]
    fn skills_sits_at_index_three() {
        assert_eq!(dot_index_for("skills"), Some(3));
    }

    #[test]
    fn unknown_ids_map_to_none() {
        assert_eq!(dot_index_for("footer"), None);
        assert_eq!(dot_index_for(""), None);
    }

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(80.0));
        assert!(navbar_scrolled(81.0));
    }
}
