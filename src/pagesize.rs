//! Pre-defined page sizes for common paper formats, in portrait orientation.

use crate::units::Pt;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(13.0 * 72.0));

// iso a-series (converted from mm)
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Conversions between portrait and landscape variants of a page size
pub trait PageOrientation {
    /// Convert the page size to portrait orientation (width ≤ height)
    fn portrait(self) -> PageSize;
    /// Convert the page size to landscape orientation (width ≥ height)
    fn landscape(self) -> PageSize;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> PageSize {
        if self.0 .0 <= self.1 .0 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 .0 >= self.1 .0 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_flips_once() {
        let landscape = A4.landscape();
        assert!(landscape.0 > landscape.1);
        assert_eq!(landscape.landscape(), landscape);
        assert_eq!(landscape.portrait(), A4);
    }
}
