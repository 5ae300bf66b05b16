//! The layout engine: pure functions that turn a content string plus the
//! current document state into concrete per-line placements.
//!
//! Nothing in here can fail; failures only surface at the drawing boundary
//! when the placements are handed to the rendering engine.

use crate::units::Pt;

/// A single line of text anchored at a concrete position
#[derive(Clone, PartialEq, Debug)]
pub struct TextPlacement {
    pub x: Pt,
    pub y: Pt,
    pub text: String,
}

/// Calculate the height of one line of text.
///
/// `cap_height_ratio` is the per-mille cap-height fraction of the active
/// family (see [crate::FontMetric]); dividing by 2000 converts it at the given
/// point size into output units, then `line_spread` applies the caller's
/// leading multiplier:
///
/// ```text
/// line_height = cap_height_ratio * font_size / 2000.0 * line_spread
/// ```
pub fn line_height(cap_height_ratio: f32, font_size: u32, line_spread: f32) -> Pt {
    Pt(cap_height_ratio * font_size as f32 / 2000.0 * line_spread)
}

/// Lay out text whose line breaks are fixed by the newline characters it
/// contains. The content is split on `'\n'` with no merging and no trimming;
/// line `i` is placed at `(x, y + i * line_height)`.
pub fn split_lines(x: Pt, y: Pt, line_height: Pt, content: &str) -> Vec<TextPlacement> {
    content
        .split('\n')
        .enumerate()
        .map(|(i, line)| TextPlacement {
            x,
            y: y + line_height * i as f32,
            text: line.to_string(),
        })
        .collect()
}

/// Lay out text by greedily wrapping it to fit within `width`.
///
/// The scan operates on the code-point sequence of `content` and packs as many
/// characters as fit before breaking; breaks can fall mid-word (word-boundary
/// wrapping is out of scope by design). `measure` must return the rendered
/// width of a substring in the active font/size/style.
///
/// A window `[i, j)` advances one code point at a time; once the measured
/// width of the window reaches `width`, the line breaks before the last
/// character taken and the window restarts there. A single character wider
/// than `width` is still placed alone, so the scan always terminates after at
/// most one emitted line per input character. The trailing remainder after the
/// scan is flushed as a final line rather than dropped.
pub fn wrap<F>(
    x: Pt,
    y: Pt,
    width: Pt,
    line_height: Pt,
    content: &str,
    mut measure: F,
) -> Vec<TextPlacement>
where
    F: FnMut(&str) -> Pt,
{
    let chars: Vec<char> = content.chars().collect();
    let mut placements: Vec<TextPlacement> = Vec::new();
    let mut lines = 0usize;

    let mut i = 0usize;
    let mut j = 0usize;
    while j < chars.len() {
        j += 1;
        let window: String = chars[i..j].iter().collect();
        if measure(&window) >= width {
            // break before the last character taken; if that would leave the
            // line empty (one glyph wider than the width), place the glyph
            // alone instead of looping forever
            let end = if j - 1 > i { j - 1 } else { j };
            placements.push(TextPlacement {
                x,
                y: y + line_height * lines as f32,
                text: chars[i..end].iter().collect(),
            });
            i = end;
            lines += 1;
        }
    }

    if i < chars.len() {
        placements.push(TextPlacement {
            x,
            y: y + line_height * lines as f32,
            text: chars[i..].iter().collect(),
        });
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn line_height_formula() {
        assert_eq!(line_height(700.0, 12, 1.0), Pt(4.2));
        assert_eq!(line_height(700.0, 12, 1.5), Pt(4.2 * 1.5));
        assert_eq!(line_height(0.0, 12, 1.0), Pt(0.0));
    }

    #[test]
    fn line_height_is_monotone_in_font_size() {
        let mut previous = Pt(0.0);
        for size in 1..64 {
            let height = line_height(687.0, size, 1.2);
            assert!(height >= previous);
            previous = height;
        }
    }

    #[test]
    fn splits_lines_on_newlines() {
        let placements = split_lines(Pt(10.0), Pt(20.0), Pt(5.0), "A\nB\nC");
        assert_eq!(
            placements,
            vec![
                TextPlacement {
                    x: Pt(10.0),
                    y: Pt(20.0),
                    text: "A".to_string()
                },
                TextPlacement {
                    x: Pt(10.0),
                    y: Pt(25.0),
                    text: "B".to_string()
                },
                TextPlacement {
                    x: Pt(10.0),
                    y: Pt(30.0),
                    text: "C".to_string()
                },
            ]
        );
    }

    #[test]
    fn split_emits_one_placement_per_line_without_trimming() {
        let placements = split_lines(Pt(0.0), Pt(0.0), Pt(7.0), "  a \n\nb  ");
        let texts: Vec<&str> = placements.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["  a ", "", "b  "]);
        let ys: Vec<f32> = placements.iter().map(|p| p.y.0).collect();
        assert_eq!(ys, vec![0.0, 7.0, 14.0]);
    }

    #[test]
    fn split_without_newlines_is_a_single_placement() {
        let placements = split_lines(Pt(1.0), Pt(2.0), Pt(3.0), "just one line");
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].text, "just one line");
    }

    fn two_per_char(text: &str) -> Pt {
        Pt(2.0 * text.chars().count() as f32)
    }

    #[test]
    fn wraps_greedily_at_the_measured_width() {
        let placements = wrap(Pt(0.0), Pt(0.0), Pt(5.0), Pt(4.0), "abcdef", two_per_char);
        let texts: Vec<&str> = placements.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "cd", "ef"]);
        let ys: Vec<f32> = placements.iter().map(|p| p.y.0).collect();
        assert_eq!(ys, vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn flushes_the_trailing_remainder() {
        let placements = wrap(Pt(0.0), Pt(0.0), Pt(5.0), Pt(4.0), "abcde", two_per_char);
        let texts: Vec<&str> = placements.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "cd", "e"]);
    }

    #[test]
    fn content_narrower_than_the_width_is_one_line() {
        let placements = wrap(Pt(3.0), Pt(7.0), Pt(100.0), Pt(4.0), "short", two_per_char);
        assert_eq!(
            placements,
            vec![TextPlacement {
                x: Pt(3.0),
                y: Pt(7.0),
                text: "short".to_string()
            }]
        );
    }

    #[test]
    fn a_glyph_wider_than_the_line_is_placed_alone() {
        // every glyph measures 10, the line fits 5: one glyph per line, and
        // the scan must terminate
        let placements = wrap(Pt(0.0), Pt(0.0), Pt(5.0), Pt(4.0), "xyz", |s| {
            Pt(10.0 * s.chars().count() as f32)
        });
        let texts: Vec<&str> = placements.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "y", "z"]);
    }

    #[test]
    fn wrap_emits_at_most_one_line_per_character() {
        let content = "some wrapped content";
        let placements = wrap(Pt(0.0), Pt(0.0), Pt(0.1), Pt(1.0), content, two_per_char);
        assert!(placements.len() <= content.chars().count());
    }

    #[test]
    fn empty_content_places_nothing() {
        let placements = wrap(Pt(0.0), Pt(0.0), Pt(5.0), Pt(4.0), "", two_per_char);
        assert!(placements.is_empty());
    }

    #[test]
    fn wraps_on_code_points_not_bytes() {
        // multi-byte characters count as single units
        let placements = wrap(Pt(0.0), Pt(0.0), Pt(5.0), Pt(4.0), "äöüß", two_per_char);
        let texts: Vec<&str> = placements.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["äö", "üß"]);
    }
}
