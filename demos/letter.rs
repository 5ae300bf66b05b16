use pdf_compose::pagesize;
use pdf_compose::{Doc, FontFamily, FontStyle, Info, LineStyle, Mm, PdfEngine, Pt};

fn main() {
    // load a font to embed and use; pass a bold variant as the second
    // argument to get real bold instead of the regular-face fallback
    let mut args = std::env::args().skip(1);
    let normal = args.next().expect("usage: letter <font.ttf> [bold.ttf]");
    let normal = std::fs::read(normal).expect("can read font file");
    let mut family = FontFamily::new("body", normal).with_fallback();
    if let Some(bold) = args.next() {
        family = family.with_bold(std::fs::read(bold).expect("can read bold font file"));
    }

    let mut engine = PdfEngine::new(pagesize::A4);
    engine.set_info(Info::new().title("A simple letter").author("pdf-compose"));

    let mut doc = Doc::new(engine, 12, 1.25);
    doc.install_font_family(&family)
        .expect("can install font family");

    let left: Pt = Mm(25.0).into();
    let right: Pt = Mm(185.0).into();

    doc.add_formatted_text(left, Mm(30.0).into(), "Dear reader,", 16, FontStyle::Bold)
        .expect("can add heading");
    doc.add_line(
        left,
        Mm(34.0).into(),
        right,
        Mm(34.0).into(),
        Pt(0.75),
        LineStyle::Solid,
    );
    doc.add_multiline_text(
        left,
        Mm(45.0).into(),
        "This letter was typeset by the pdf-compose demo.\nEach of these lines was placed explicitly,\none line height apart.",
    )
    .expect("can add body");
    doc.add_formatted_text(
        left,
        Mm(70.0).into(),
        "Yours sincerely,",
        12,
        FontStyle::Italic,
    )
    .expect("can add sign-off");

    let out = std::fs::File::create("letter.pdf").expect("can create letter.pdf");
    doc.into_engine().write(out).expect("can write pdf");
}
