/// The style a run of text is drawn in.
///
/// Underline is a style like bold or italic, not an independent layer: text
/// drawn with it renders in the regular face with an underline stroke.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    Underline,
}

impl FontStyle {
    /// The style slot a font program must be installed under for this style to
    /// render. Underline has no face of its own; it draws with the regular one.
    pub fn slot(self) -> FontStyle {
        match self {
            FontStyle::Normal | FontStyle::Underline => FontStyle::Normal,
            FontStyle::Bold => FontStyle::Bold,
            FontStyle::Italic => FontStyle::Italic,
        }
    }

    /// Whether text drawn in this style carries an underline stroke
    pub fn is_underlined(self) -> bool {
        matches!(self, FontStyle::Underline)
    }
}

/// The dash pattern a line is stroked with
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// The PDF dash array for this style, as (on, off) lengths in points.
    /// [None] strokes solid.
    pub fn dash_pattern(self) -> Option<(f32, f32)> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some((3.0, 3.0)),
            LineStyle::Dotted => Some((1.0, 2.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underline_renders_with_the_regular_face() {
        assert_eq!(FontStyle::Underline.slot(), FontStyle::Normal);
        assert!(FontStyle::Underline.is_underlined());
        assert!(!FontStyle::Bold.is_underlined());
    }

    #[test]
    fn bold_and_italic_keep_their_own_slots() {
        assert_eq!(FontStyle::Bold.slot(), FontStyle::Bold);
        assert_eq!(FontStyle::Italic.slot(), FontStyle::Italic);
        assert_eq!(FontStyle::Normal.slot(), FontStyle::Normal);
    }

    #[test]
    fn solid_lines_have_no_dash_pattern() {
        assert_eq!(LineStyle::Solid.dash_pattern(), None);
        assert!(LineStyle::Dashed.dash_pattern().is_some());
    }
}
