use crate::style::FontStyle;

/// A font family: the raw font programs for each style slot, ready to be
/// installed into a document with [crate::Doc::install_font_family].
///
/// The regular face is mandatory; bold and italic are optional. By default a
/// style with no installed face is an error when selected. Call
/// [FontFamily::with_fallback] to instead render missing styles with the
/// regular face. Fonts are embedded in their entirety in the generated PDF,
/// so large fonts may dramatically increase the size of the output.
#[derive(Clone)]
pub struct FontFamily {
    pub name: String,
    pub normal: Vec<u8>,
    pub bold: Option<Vec<u8>>,
    pub italic: Option<Vec<u8>>,
    fallback: bool,
}

impl FontFamily {
    /// Create a family from its regular face
    pub fn new<S: ToString>(name: S, normal: Vec<u8>) -> FontFamily {
        FontFamily {
            name: name.to_string(),
            normal,
            bold: None,
            italic: None,
            fallback: false,
        }
    }

    /// Attach a bold face to the family
    pub fn with_bold(mut self, bold: Vec<u8>) -> FontFamily {
        self.bold = Some(bold);
        self
    }

    /// Attach an italic face to the family
    pub fn with_italic(mut self, italic: Vec<u8>) -> FontFamily {
        self.italic = Some(italic);
        self
    }

    /// Render styles without a face of their own with the regular face instead
    /// of rejecting them
    pub fn with_fallback(mut self) -> FontFamily {
        self.fallback = true;
        self
    }

    /// The font program that backs the given style slot, or [None] when the
    /// slot is missing and the family was not built with a fallback.
    /// Underline never has a slot of its own; pass the style through
    /// [FontStyle::slot] first.
    pub fn face_for_slot(&self, slot: FontStyle) -> Option<&[u8]> {
        let face = match slot {
            FontStyle::Normal | FontStyle::Underline => Some(self.normal.as_slice()),
            FontStyle::Bold => self.bold.as_deref(),
            FontStyle::Italic => self.italic.as_deref(),
        };
        face.or_else(|| self.fallback.then_some(self.normal.as_slice()))
    }

    /// The style slots this family can render, in installation order
    pub fn slots(&self) -> Vec<(FontStyle, &[u8])> {
        [FontStyle::Normal, FontStyle::Bold, FontStyle::Italic]
            .into_iter()
            .filter_map(|slot| self.face_for_slot(slot).map(|face| (slot, face)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn family() -> FontFamily {
        FontFamily::new("test", vec![1]).with_bold(vec![2])
    }

    #[test]
    fn missing_styles_are_rejected_by_default() {
        let family = family();
        assert_eq!(family.face_for_slot(FontStyle::Bold), Some(&[2u8][..]));
        assert_eq!(family.face_for_slot(FontStyle::Italic), None);
    }

    #[test]
    fn fallback_families_render_missing_styles_with_the_regular_face() {
        let family = family().with_fallback();
        assert_eq!(family.face_for_slot(FontStyle::Italic), Some(&[1u8][..]));
        assert_eq!(family.face_for_slot(FontStyle::Bold), Some(&[2u8][..]));
    }

    #[test]
    fn underline_uses_the_regular_face() {
        let family = family();
        assert_eq!(family.face_for_slot(FontStyle::Underline), Some(&[1u8][..]));
    }

    #[test]
    fn slots_skip_missing_styles() {
        let slots: Vec<FontStyle> = family().slots().into_iter().map(|(s, _)| s).collect();
        assert_eq!(slots, vec![FontStyle::Normal, FontStyle::Bold]);
    }
}
