use crate::engine::RenderEngine;
use crate::error::DocError;
use crate::font::Font;
use crate::info::Info;
use crate::pagesize::PageSize;
use crate::refs::{ObjKind, ObjectIds};
use crate::style::{FontStyle, LineStyle};
use crate::units::Pt;
use id_arena::{Arena, Id};
use log::debug;
use pdf_writer::{Finish, Name, Pdf, Rect, Ref};
use std::collections::HashMap;
use std::io::Write;

#[derive(Copy, Clone)]
struct ActiveFont {
    id: Id<Font>,
    size: Pt,
    underline: bool,
}

/// One drawn element on a page, in top-left-origin coordinates
enum PageItem {
    Text {
        font: Id<Font>,
        size: Pt,
        x: Pt,
        y: Pt,
        text: String,
    },
    Line {
        x1: Pt,
        y1: Pt,
        x2: Pt,
        y2: Pt,
        width: Pt,
        style: LineStyle,
    },
}

#[derive(Default)]
struct Page {
    items: Vec<PageItem>,
}

/// The bundled [RenderEngine]: records text runs and lines per page and
/// serializes the whole document as a PDF with a call to [PdfEngine::write].
///
/// Coordinates given to drawing calls have their origin at the top-left corner
/// of the page with y growing downwards; the conversion to PDF's bottom-up
/// page space happens at serialization time. Text coordinates address the
/// baseline of the line.
pub struct PdfEngine {
    page_size: PageSize,
    info: Option<Info>,
    fonts: Arena<Font>,
    slots: HashMap<(String, FontStyle), Id<Font>>,
    active: Option<ActiveFont>,
    pages: Vec<Page>,
}

impl PdfEngine {
    /// Create an engine with a single blank page of the given size
    pub fn new(page_size: PageSize) -> PdfEngine {
        PdfEngine {
            page_size,
            info: None,
            fonts: Arena::new(),
            slots: HashMap::new(),
            active: None,
            pages: vec![Page::default()],
        }
    }

    /// Sets information about the document. If not provided, no information
    /// block will be written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Start a new blank page; subsequent drawing calls land on it
    pub fn add_page(&mut self) {
        self.pages.push(Page::default());
    }

    /// The number of pages in the document so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The (width, height) of the pages this engine produces
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    fn current_page(&mut self) -> &mut Page {
        // the engine always holds at least one page
        self.pages.last_mut().expect("engine has a page")
    }

    fn render_page(&self, page: &Page) -> Result<Vec<u8>, std::io::Error> {
        let height = self.page_size.1;
        let mut content: Vec<u8> = Vec::new();

        for item in page.items.iter() {
            match item {
                PageItem::Text {
                    font,
                    size,
                    x,
                    y,
                    text,
                } => {
                    writeln!(&mut content, "BT")?;
                    writeln!(&mut content, "/F{} {} Tf", font.index(), size.0)?;
                    writeln!(&mut content, "{} {} Td", x.0, (height - *y).0)?;
                    write!(&mut content, "<")?;
                    for ch in text.chars() {
                        write!(&mut content, "{:04x}", self.fonts[*font].glyph_or_replacement(ch))?;
                    }
                    writeln!(&mut content, "> Tj")?;
                    writeln!(&mut content, "ET")?;
                }
                PageItem::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    width,
                    style,
                } => {
                    writeln!(&mut content, "q")?;
                    writeln!(&mut content, "{} w", width.0)?;
                    if let Some((on, off)) = style.dash_pattern() {
                        writeln!(&mut content, "[{on} {off}] 0 d")?;
                    }
                    writeln!(&mut content, "{} {} m", x1.0, (height - *y1).0)?;
                    writeln!(&mut content, "{} {} l", x2.0, (height - *y2).0)?;
                    writeln!(&mut content, "S")?;
                    writeln!(&mut content, "Q")?;
                }
            }
        }

        Ok(content)
    }

    /// Write the entire document to the writer. The document is rendered in
    /// memory first, so very large documents can allocate a significant
    /// amount of memory.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), DocError> {
        debug!(
            "serializing document: {} page(s), {} font(s)",
            self.pages.len(),
            self.fonts.len()
        );

        let mut refs = ObjectIds::new();
        let catalog_id = refs.gen(ObjKind::Catalog);
        let page_tree_id = refs.gen(ObjKind::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..self.pages.len())
            .map(|i| refs.gen(ObjKind::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs.iter().copied());

        for (id, font) in self.fonts.iter() {
            font.write(&mut refs, id.index(), &mut writer);
        }

        let media_box = Rect {
            x1: 0.0,
            y1: 0.0,
            x2: self.page_size.0 .0,
            y2: self.page_size.1 .0,
        };
        for (i, page) in self.pages.iter().enumerate() {
            let mut pg = writer.page(page_refs[i]);
            pg.media_box(media_box);
            pg.parent(page_tree_id);

            let mut resources = pg.resources();
            let mut resource_fonts = resources.fonts();
            for (id, _) in self.fonts.iter() {
                if let Some(font_ref) = refs.get(ObjKind::Font(id.index())) {
                    resource_fonts.pair(Name(format!("F{}", id.index()).as_bytes()), font_ref);
                }
            }
            resource_fonts.finish();
            resources.finish();

            let content_id = refs.gen(ObjKind::Content(i));
            pg.contents(content_id);
            pg.finish();

            let rendered = self.render_page(page)?;
            writer.stream(content_id, rendered.as_slice());
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

impl RenderEngine for PdfEngine {
    fn install_font(
        &mut self,
        bytes: &[u8],
        family: &str,
        style: FontStyle,
        use_kerning: bool,
    ) -> Result<(), DocError> {
        let font = Font::load(bytes.to_vec(), family, use_kerning)?;
        let id = self.fonts.alloc(font);
        self.slots.insert((family.to_string(), style), id);
        debug!("installed font {family} ({style:?})");
        Ok(())
    }

    fn select_font(&mut self, family: &str, style: FontStyle, size: u32) -> Result<(), DocError> {
        let id = self
            .slots
            .get(&(family.to_string(), style.slot()))
            .copied()
            .ok_or_else(|| DocError::FontNotInstalled {
                family: family.to_string(),
                style,
            })?;
        self.active = Some(ActiveFont {
            id,
            size: Pt(size as f32),
            underline: style.is_underlined(),
        });
        Ok(())
    }

    fn measure_text_width(&self, text: &str) -> Pt {
        match self.active {
            Some(active) => self.fonts[active.id].text_width(text, active.size),
            None => Pt(0.0),
        }
    }

    fn draw_text_at(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), DocError> {
        let active = self.active.ok_or(DocError::NoFontInstalled)?;

        if active.underline {
            let (offset, thickness) = self.fonts[active.id].underline(active.size);
            let width = self.fonts[active.id].text_width(text, active.size);
            // the underline offset is in baseline-up font space; flip it into
            // the top-down page space
            let line_y = y - offset;
            self.current_page().items.push(PageItem::Line {
                x1: x,
                y1: line_y,
                x2: x + width,
                y2: line_y,
                width: thickness,
                style: LineStyle::Solid,
            });
        }

        self.current_page().items.push(PageItem::Text {
            font: active.id,
            size: active.size,
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt, width: Pt, style: LineStyle) {
        self.current_page().items.push(PageItem::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing_text_without_a_font_is_rejected() {
        let mut engine = PdfEngine::new(crate::pagesize::A4);
        let err = engine.draw_text_at(Pt(10.0), Pt(10.0), "hi").unwrap_err();
        assert!(matches!(err, DocError::NoFontInstalled));
    }

    #[test]
    fn selecting_an_uninstalled_family_is_rejected() {
        let mut engine = PdfEngine::new(crate::pagesize::A4);
        let err = engine
            .select_font("missing", FontStyle::Normal, 12)
            .unwrap_err();
        assert!(matches!(err, DocError::FontNotInstalled { .. }));
    }

    #[test]
    fn measuring_without_a_font_is_zero() {
        let engine = PdfEngine::new(crate::pagesize::A4);
        assert_eq!(engine.measure_text_width("anything"), Pt(0.0));
    }

    #[test]
    fn a_fontless_document_serializes() {
        let mut engine = PdfEngine::new(crate::pagesize::LETTER);
        engine.draw_line(Pt(0.0), Pt(0.0), Pt(100.0), Pt(100.0), Pt(1.0), LineStyle::Dashed);
        engine.add_page();
        assert_eq!(engine.page_count(), 2);

        let mut out: Vec<u8> = Vec::new();
        engine.write(&mut out).expect("can serialize");
        assert!(out.starts_with(b"%PDF-"));
    }

    #[test]
    fn lines_render_with_their_dash_pattern() {
        let engine = PdfEngine::new(crate::pagesize::A4);
        let mut page = Page::default();
        page.items.push(PageItem::Line {
            x1: Pt(0.0),
            y1: Pt(10.0),
            x2: Pt(50.0),
            y2: Pt(10.0),
            width: Pt(2.0),
            style: LineStyle::Dotted,
        });
        let content = engine.render_page(&page).expect("can render");
        let content = String::from_utf8(content).expect("content is utf-8");
        assert!(content.contains("2 w"));
        assert!(content.contains("[1 2] 0 d"));
        assert!(content.contains("S"));
    }
}
