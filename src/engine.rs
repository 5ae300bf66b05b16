use crate::error::DocError;
use crate::style::{FontStyle, LineStyle};
use crate::units::Pt;

/// The drawing capabilities a [crate::Doc] needs from the surrounding
/// rendering engine. The document state and layout engine own no output
/// format themselves; everything below the level of "place this substring at
/// these coordinates" is the engine's responsibility.
///
/// [crate::PdfEngine] is the bundled implementation; the trait exists so the
/// document state can be driven against any backend (including the recording
/// stubs the tests use).
pub trait RenderEngine {
    /// Register a font program under a (family, style) slot. Must succeed
    /// before [RenderEngine::select_font] referencing that slot can.
    fn install_font(
        &mut self,
        bytes: &[u8],
        family: &str,
        style: FontStyle,
        use_kerning: bool,
    ) -> Result<(), DocError>;

    /// Make a (family, style, size) combination active for subsequent
    /// measurement and drawing. Fails when the family is not installed for
    /// the requested style.
    fn select_font(&mut self, family: &str, style: FontStyle, size: u32) -> Result<(), DocError>;

    /// The width of `text` rendered in the active font/size/style. Expected to
    /// be consistent (monotonic in string length for non-empty strings) so
    /// that greedy wrapping behaves sensibly. Returns zero when no font is
    /// active.
    fn measure_text_width(&self, text: &str) -> Pt;

    /// Paint one line of text at the given position in the active font state
    fn draw_text_at(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), DocError>;

    /// Stroke a straight line between two points
    fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt, width: Pt, style: LineStyle);
}
