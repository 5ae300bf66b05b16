use derive_more::{Add, AddAssign, Display, From, Into, Sum};

/// A dimension in PDF points (1/72 of an inch). This is the base unit that all
/// drawing and layout operations work in.
#[derive(
    Add, AddAssign, Sum, Display, From, Into, Copy, Clone, PartialEq, PartialOrd, Debug, Default,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A dimension in millimetres. Convert to [Pt] with `.into()` before handing
/// it to drawing calls.
#[derive(Add, AddAssign, Display, From, Into, Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

/// A dimension in inches.
#[derive(Add, AddAssign, Display, From, Into, Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[display("{_0}in")]
pub struct In(pub f32);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * 72.0 / 25.4)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Mm {
        Mm(pt.0 * 25.4 / 72.0)
    }
}

impl From<In> for Pt {
    fn from(i: In) -> Pt {
        Pt(i.0 * 72.0)
    }
}

impl From<Pt> for In {
    fn from(pt: Pt) -> In {
        In(pt.0 / 72.0)
    }
}

impl std::ops::Sub for Pt {
    type Output = Pt;

    fn sub(self, rhs: Pt) -> Pt {
        Pt(self.0 - rhs.0)
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Mul<Pt> for f32 {
    type Output = Pt;

    fn mul(self, rhs: Pt) -> Pt {
        Pt(self * rhs.0)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        let pt: Pt = In(1.0).into();
        assert_eq!(pt, Pt(72.0));

        let pt: Pt = Mm(25.4).into();
        assert!((pt.0 - 72.0).abs() < 1e-4);

        let mm: Mm = Pt(72.0).into();
        assert!((mm.0 - 25.4).abs() < 1e-4);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Pt(1.0) + Pt(2.0), Pt(3.0));
        assert_eq!(Pt(3.0) - Pt(2.0), Pt(1.0));
        assert_eq!(Pt(2.0) * 3.0, Pt(6.0));
        assert_eq!(Pt(6.0) / 3.0, Pt(2.0));
        assert!(Pt(1.0) < Pt(2.0));
    }
}
