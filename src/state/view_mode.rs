/// Image comparison view modes
///
/// Once an analysis returns an annotated image, the user can switch
/// between seeing the original, the annotated version, or both side by
/// side. The stored mode persists across results; when a result has no
/// annotated image the selector is hidden and only the original shows.

/// Which comparison layout is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Show the source image only
    Original,
    /// Show source and annotated image with a connector between them
    #[default]
    SideBySide,
    /// Show the annotated image only
    Detected,
}

impl ViewMode {
    /// All modes, in the order the selector buttons are laid out.
    pub const ALL: [ViewMode; 3] = [ViewMode::Original, ViewMode::SideBySide, ViewMode::Detected];

    /// Button label for the selector row.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Original => "Original Only",
            ViewMode::SideBySide => "Side by Side",
            ViewMode::Detected => "Detected Only",
        }
    }
}

/// Which panes the comparison area should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonLayout {
    pub show_original: bool,
    pub show_annotated: bool,
    /// Directional connector between the two images
    pub show_connector: bool,
    /// Whether the mode selector buttons are rendered at all
    pub show_selector: bool,
}

impl ComparisonLayout {
    /// Resolve the layout for a mode, given whether the current result
    /// carries an annotated image. Without one, the stored mode is
    /// ignored: exactly the original is shown and the selector is hidden.
    pub fn resolve(mode: ViewMode, has_annotated: bool) -> Self {
        if !has_annotated {
            return ComparisonLayout {
                show_original: true,
                show_annotated: false,
                show_connector: false,
                show_selector: false,
            };
        }

        match mode {
            ViewMode::Original => ComparisonLayout {
                show_original: true,
                show_annotated: false,
                show_connector: false,
                show_selector: true,
            },
            ViewMode::SideBySide => ComparisonLayout {
                show_original: true,
                show_annotated: true,
                show_connector: true,
                show_selector: true,
            },
            ViewMode::Detected => ComparisonLayout {
                show_original: false,
                show_annotated: true,
                show_connector: false,
                show_selector: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_side_by_side() {
        assert_eq!(ViewMode::default(), ViewMode::SideBySide);
    }

    #[test]
    fn test_no_annotated_image_forces_original_only() {
        // The stored mode must not leak through when there is nothing
        // to compare against.
        for mode in ViewMode::ALL {
            let layout = ComparisonLayout::resolve(mode, false);
            assert!(layout.show_original);
            assert!(!layout.show_annotated);
            assert!(!layout.show_connector);
            assert!(!layout.show_selector);
        }
    }

    #[test]
    fn test_side_by_side_shows_both_with_connector() {
        let layout = ComparisonLayout::resolve(ViewMode::SideBySide, true);
        assert!(layout.show_original);
        assert!(layout.show_annotated);
        assert!(layout.show_connector);
        assert!(layout.show_selector);
    }

    #[test]
    fn test_single_image_modes_show_exactly_one_image() {
        let original = ComparisonLayout::resolve(ViewMode::Original, true);
        assert!(original.show_original && !original.show_annotated);
        assert!(!original.show_connector);

        let detected = ComparisonLayout::resolve(ViewMode::Detected, true);
        assert!(!detected.show_original && detected.show_annotated);
        assert!(!detected.show_connector);
    }
}
