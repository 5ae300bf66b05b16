use crate::engine::RenderEngine;
use crate::error::DocError;
use crate::family::FontFamily;
use crate::layout;
use crate::metrics::FontMetric;
use crate::style::{FontStyle, LineStyle};
use crate::units::Pt;
use log::{debug, warn};

/// The document state: the single source of truth for what font, size, and
/// style apply to the next drawn text, composed over a [RenderEngine] that
/// does the actual painting.
///
/// A `Doc` is created once per output document, mutated throughout the
/// authoring session, and discarded (or unwrapped with [Doc::into_engine])
/// when the document is finalized. It is exclusively owned by one authoring
/// session; sharing one instance across threads requires external
/// synchronization.
///
/// Style and size overrides made by the `add_formatted_*` calls are scoped:
/// the state after any of them is exactly the state before, even when the
/// inner drawing call fails.
pub struct Doc<E: RenderEngine> {
    engine: E,
    font_name: String,
    font_size: u32,
    default_font_size: u32,
    font_style: FontStyle,
    line_spread: f32,
    cap_value: f32,
    cursor: (Pt, Pt),
}

impl<E: RenderEngine> Doc<E> {
    /// Create a document over the given engine. `font_size` becomes the
    /// default size that [Doc::default_font_size] restores to; sizes start at
    /// 1, so a zero is raised to the minimum. `line_spread` is the leading
    /// multiplier applied to every computed line height.
    ///
    /// No font is active yet: [Doc::install_font_family] must be called before
    /// any text can be measured or drawn.
    pub fn new(engine: E, font_size: u32, line_spread: f32) -> Doc<E> {
        let font_size = font_size.max(1);
        Doc {
            engine,
            font_name: String::new(),
            font_size,
            default_font_size: font_size,
            font_style: FontStyle::Normal,
            line_spread,
            cap_value: 0.0,
            cursor: (Pt(0.0), Pt(0.0)),
        }
    }

    /// Borrow the composed rendering engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably borrow the composed rendering engine, e.g. to add pages or set
    /// document metadata on a [crate::PdfEngine]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Unwrap the document into its engine for finalization
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Install a font family and make it the active one, replacing any family
    /// installed before. Derives the cap-height metric from the regular face,
    /// registers every style slot the family provides with the engine, and
    /// re-selects the active font at the current size and style. The state is
    /// untouched when the regular face cannot be parsed.
    pub fn install_font_family(&mut self, family: &FontFamily) -> Result<(), DocError> {
        let metric = FontMetric::from_font_bytes(&family.normal, &family.name)?;
        self.install_family_with_metric(family, metric)
    }

    fn install_family_with_metric(
        &mut self,
        family: &FontFamily,
        metric: FontMetric,
    ) -> Result<(), DocError> {
        for (slot, face) in family.slots() {
            self.engine.install_font(face, &family.name, slot, true)?;
        }

        self.cap_value = metric.cap_height_ratio;
        self.font_name = family.name.clone();
        debug!(
            "installed font family {} (cap height ratio {})",
            family.name, self.cap_value
        );

        self.engine
            .select_font(&self.font_name, self.font_style, self.font_size)
    }

    /// Set the font size for all text added after. Sizes start at 1; zero is
    /// rejected before the engine is consulted. Also fails when the engine
    /// rejects the (family, style, size) combination.
    pub fn set_font_size(&mut self, size: u32) -> Result<(), DocError> {
        if size == 0 {
            return Err(DocError::InvalidFontSize);
        }
        self.engine
            .select_font(&self.font_name, self.font_style, size)?;
        self.font_size = size;
        Ok(())
    }

    /// Reset the font size to the default established at construction.
    /// Idempotent: calling it twice leaves the state identical to calling it
    /// once.
    pub fn default_font_size(&mut self) -> Result<(), DocError> {
        self.set_font_size(self.default_font_size)
    }

    /// Change the font style (italic, bold, underline) for text added after
    pub fn set_font_style(&mut self, style: FontStyle) -> Result<(), DocError> {
        self.engine
            .select_font(&self.font_name, style, self.font_size)?;
        self.font_style = style;
        Ok(())
    }

    /// Reset the font style to [FontStyle::Normal]
    pub fn default_font_style(&mut self) -> Result<(), DocError> {
        self.set_font_style(FontStyle::Normal)
    }

    /// Set the cursor. New elements anchor at the currently set position
    /// until it is changed again; page bounds are not validated.
    pub fn set_position(&mut self, x: Pt, y: Pt) {
        self.cursor = (x, y);
    }

    /// The last explicitly set drawing position
    pub fn position(&self) -> (Pt, Pt) {
        self.cursor
    }

    /// The currently active font size
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// The currently active font style
    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    /// Calculate the line height for the currently active font size
    pub fn default_line_height(&self) -> Pt {
        self.line_height(self.font_size)
    }

    /// Calculate the line height of a text line at the given font size
    pub fn line_height(&self, font_size: u32) -> Pt {
        layout::line_height(self.cap_value, font_size, self.line_spread)
    }

    /// Add a text field at the given position
    pub fn add_text(&mut self, x: Pt, y: Pt, content: &str) -> Result<(), DocError> {
        self.set_position(x, y);
        self.engine.draw_text_at(x, y, content)
    }

    /// Add a text field at the given position with an individual size
    pub fn add_sized_text(
        &mut self,
        x: Pt,
        y: Pt,
        content: &str,
        size: u32,
    ) -> Result<(), DocError> {
        self.with_format(size, self.font_style, |doc| doc.add_text(x, y, content))
    }

    /// Add a text field at the given position with an individual size and
    /// style
    pub fn add_formatted_text(
        &mut self,
        x: Pt,
        y: Pt,
        content: &str,
        size: u32,
        style: FontStyle,
    ) -> Result<(), DocError> {
        self.with_format(size, style, |doc| doc.add_text(x, y, content))
    }

    /// Add a text field with multiple lines of text. The lines are divided by
    /// the newline character `\n`; line `i` lands at `y + i * line_height`.
    pub fn add_multiline_text(&mut self, x: Pt, y: Pt, content: &str) -> Result<(), DocError> {
        let placements = layout::split_lines(x, y, self.default_line_height(), content);
        for placement in placements {
            self.add_text(placement.x, placement.y, &placement.text)?;
        }
        Ok(())
    }

    /// Same as [Doc::add_multiline_text] but with an individual font size and
    /// style
    pub fn add_formatted_multiline_text(
        &mut self,
        x: Pt,
        y: Pt,
        content: &str,
        size: u32,
        style: FontStyle,
    ) -> Result<(), DocError> {
        self.with_format(size, style, |doc| doc.add_multiline_text(x, y, content))
    }

    /// Add text that wraps automatically when a line reaches `x2`.
    ///
    /// Wrapping is greedy and character-level: as many characters as fit are
    /// packed before the line breaks, and breaks can fall mid-word. Line
    /// heights use the default font size regardless of the currently active
    /// one. The trailing remainder always lands as the final line.
    pub fn add_wrap_text(&mut self, x1: Pt, y: Pt, x2: Pt, content: &str) -> Result<(), DocError> {
        let line_height = self.line_height(self.default_font_size);
        let placements = layout::wrap(x1, y, x2 - x1, line_height, content, |text| {
            self.engine.measure_text_width(text)
        });
        for placement in placements {
            self.add_text(placement.x, placement.y, &placement.text)?;
        }
        Ok(())
    }

    /// Same as [Doc::add_wrap_text] but with an individual font size and style
    pub fn add_formatted_wrap_text(
        &mut self,
        x1: Pt,
        y: Pt,
        x2: Pt,
        content: &str,
        size: u32,
        style: FontStyle,
    ) -> Result<(), DocError> {
        self.with_format(size, style, |doc| doc.add_wrap_text(x1, y, x2, content))
    }

    /// Add a line between the two points
    pub fn add_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt, width: Pt, style: LineStyle) {
        self.engine.draw_line(x1, y1, x2, y2, width, style);
    }

    /// Run `op` with the size and style temporarily overridden, restoring the
    /// previous size and then the previous style afterwards no matter how the
    /// operation went. The first error encountered is the one propagated.
    fn with_format<T>(
        &mut self,
        size: u32,
        style: FontStyle,
        op: impl FnOnce(&mut Self) -> Result<T, DocError>,
    ) -> Result<T, DocError> {
        let previous_size = self.font_size;
        let previous_style = self.font_style;

        let result = self
            .set_font_size(size)
            .and_then(|_| self.set_font_style(style))
            .and_then(|_| op(self));

        let restored = self
            .set_font_size(previous_size)
            .and_then(|_| self.set_font_style(previous_style));

        match (result, restored) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), restored) => {
                if let Err(restore_err) = restored {
                    warn!("could not restore font state after a failed operation: {restore_err}");
                }
                Err(e)
            }
        }
    }
}
