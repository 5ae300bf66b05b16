use crate::error::DocError;
use crate::refs::{ObjKind, ObjectIds};
use crate::units::Pt;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;

/// A parsed font program backing one style slot of a family. Fonts are TTF or
/// OTF and are embedded in their entirety in the generated PDF.
pub struct Font {
    face: OwnedFace,
    use_kerning: bool,
}

impl Font {
    /// Parse a font from raw bytes. `family` only labels the error when the
    /// face is malformed.
    pub fn load(bytes: Vec<u8>, family: &str, use_kerning: bool) -> Result<Font, DocError> {
        let face = OwnedFace::from_vec(bytes, 0).map_err(|source| DocError::FontInstallation {
            family: family.to_string(),
            source,
        })?;

        Ok(Font { face, use_kerning })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph a character renders as: its own, else U+FFFD, else '?', else
    /// the missing-glyph slot 0
    pub fn glyph_or_replacement(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    fn scaling(&self, size: Pt) -> f32 {
        size.0 / self.face().units_per_em() as f32
    }

    /// The width of `text` at the given size, summing glyph advances and, when
    /// the font was installed with kerning, the kerning adjustments between
    /// neighbouring glyphs
    pub fn text_width(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        let mut width = 0.0f32;
        let mut previous: Option<u16> = None;
        for ch in text.chars() {
            let gid = self.glyph_or_replacement(ch);
            width += self
                .face()
                .glyph_hor_advance(GlyphId(gid))
                .unwrap_or_default() as f32;
            if self.use_kerning {
                if let Some(prev) = previous {
                    width += self.kerning(prev, gid) as f32;
                }
            }
            previous = Some(gid);
        }
        Pt(width * scaling)
    }

    fn kerning(&self, left: u16, right: u16) -> i16 {
        let Some(kern) = self.face().tables().kern else {
            return 0;
        };
        kern.subtables
            .into_iter()
            .filter(|st| st.horizontal && !st.variable)
            .find_map(|st| st.glyphs_kerning(GlyphId(left), GlyphId(right)))
            .unwrap_or(0)
    }

    /// Where to stroke an underline relative to the baseline, as
    /// (offset, thickness) at the given size. Falls back to a thin stroke
    /// slightly below the baseline when the face carries no underline metrics.
    pub fn underline(&self, size: Pt) -> (Pt, Pt) {
        let scaling = self.scaling(size);
        match self.face().underline_metrics() {
            Some(m) => (
                Pt(m.position as f32 * scaling),
                Pt(m.thickness as f32 * scaling),
            ),
            None => (size * -0.1, size * 0.05),
        }
    }

    /// cid (= gid, Identity encoding) -> unicode char, from the face's cmap
    fn cid_to_char(&self) -> HashMap<u16, char> {
        let mut map: HashMap<u16, char> = HashMap::new();

        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };
        for subtable in cmap.subtables.into_iter().filter(|st| st.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0).or_insert(ch);
                    }
                }
            });
        }

        map
    }

    fn write_font_data(&self, refs: &mut ObjectIds, index: usize, writer: &mut Pdf) -> Ref {
        let id = refs.gen(ObjKind::FontData(index));

        writer
            .stream(id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        id
    }

    fn write_descriptor(&self, refs: &mut ObjectIds, index: usize, writer: &mut Pdf) -> Ref {
        let font_data_id = self.write_font_data(refs, index, writer);
        let id = refs.gen(ObjKind::FontDescriptor(index));
        let scaling = 1000.0 / self.face().units_per_em() as f32;

        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(format!("F{index}").as_bytes()));
        descriptor.weight(self.face().weight().to_number());

        let mut flags = FontFlags::empty();
        if self.face().is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if self.face().is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        let bbox = self.face().global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(self.face().italic_angle());
        descriptor.ascent(self.face().ascender() as f32 * scaling);
        descriptor.descent(self.face().descender() as f32 * scaling);
        descriptor.cap_height(
            self.face()
                .capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        // no reliable way to derive the stem width from a ttf program
        descriptor.stem_v(80.0);
        descriptor.font_file2(font_data_id);

        id
    }

    fn write_cid(&self, refs: &mut ObjectIds, index: usize, writer: &mut Pdf) -> Ref {
        let descriptor_id = self.write_descriptor(refs, index, writer);
        let id = refs.gen(ObjKind::CidFont(index));
        let scaling = 1000.0 / self.face().units_per_em() as f32;

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);

        // with the Identity encoding every gid is its own cid, so the widths
        // array is one consecutive run over the whole glyph table
        let advances: Vec<f32> = (0..self.face().number_of_glyphs())
            .map(|gid| {
                self.face()
                    .glyph_hor_advance(GlyphId(gid))
                    .unwrap_or_default() as f32
                    * scaling
            })
            .collect();
        cid_font.widths().consecutive(0, advances);

        cid_font.default_width(1000.0);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_to_unicode(&self, refs: &mut ObjectIds, index: usize, writer: &mut Pdf) -> Ref {
        let id = refs.gen(ObjKind::ToUnicode(index));

        let mut map: String = r#"/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo
<< /Registry (Adobe)
/Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
"#
        .to_string();

        let mut cids: Vec<(u16, char)> = self.cid_to_char().into_iter().collect();
        cids.sort_by_key(|&(cid, _)| cid);

        // bfchar blocks are capped at 100 entries
        for block in cids.chunks(100) {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(cid, ch) in block {
                let ch: u32 = ch.into();
                map.push_str(&format!("<{cid:04x}> <{ch:04x}>\n"));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(pdf_writer::Filter::FlateDecode);

        id
    }

    /// Serialize the full Type0 font object graph for this face
    pub(crate) fn write(&self, refs: &mut ObjectIds, index: usize, writer: &mut Pdf) {
        let font_id = refs.gen(ObjKind::Font(index));
        let cid_font_id = self.write_cid(refs, index, writer);
        let to_unicode_id = self.write_to_unicode(refs, index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
        font.finish();
    }
}
