use pdf_compose::pagesize;
use pdf_compose::{Doc, FontFamily, FontStyle, Mm, PdfEngine, Pt};

fn main() {
    let font = std::env::args()
        .nth(1)
        .expect("usage: wrapped-text <font.ttf>");
    let font = std::fs::read(font).expect("can read font file");
    let family = FontFamily::new("body", font).with_fallback();

    let mut doc = Doc::new(PdfEngine::new(pagesize::A4), 11, 1.4);
    doc.install_font_family(&family)
        .expect("can install font family");

    let left: Pt = Mm(20.0).into();
    let right: Pt = Mm(190.0).into();

    doc.add_formatted_text(left, Mm(25.0).into(), "Lorem Ipsum", 18, FontStyle::Underline)
        .expect("can add heading");

    // greedy character-level wrapping against the measured column width
    let body = lipsum::lipsum(150);
    doc.add_wrap_text(left, Mm(40.0).into(), right, &body)
        .expect("can add wrapped body");

    let out = std::fs::File::create("wrapped-text.pdf").expect("can create wrapped-text.pdf");
    doc.into_engine().write(out).expect("can write pdf");
}
