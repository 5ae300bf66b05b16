use crate::error::DocError;
use owned_ttf_parser::Face;

/// The cap-height metric of a font family, derived once when the family is
/// installed and never mutated afterwards.
///
/// The ratio encodes `capHeight * 1000 / unitsPerEm`: the height of capital
/// letters as a per-mille fraction of the em square. Line heights are computed
/// from it, see [crate::layout::line_height].
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FontMetric {
    pub cap_height_ratio: f32,
}

impl FontMetric {
    /// Build the metric from raw face values
    pub fn from_parts(cap_height: i16, units_per_em: u16) -> FontMetric {
        FontMetric {
            cap_height_ratio: cap_height as f32 * 1000.0 / units_per_em as f32,
        }
    }

    /// Derive the metric from a font program. `family` is only used to label
    /// the error when the face cannot be parsed or carries no cap height.
    pub fn from_font_bytes(bytes: &[u8], family: &str) -> Result<FontMetric, DocError> {
        let face = Face::parse(bytes, 0).map_err(|source| DocError::FontInstallation {
            family: family.to_string(),
            source,
        })?;

        let units_per_em = face.units_per_em();
        let cap_height = face
            .capital_height()
            .filter(|_| units_per_em > 0)
            .ok_or_else(|| DocError::MetricParse {
                family: family.to_string(),
            })?;

        Ok(FontMetric::from_parts(cap_height, units_per_em))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_per_mille_of_the_em_square() {
        let metric = FontMetric::from_parts(1400, 2000);
        assert_eq!(metric.cap_height_ratio, 700.0);

        let metric = FontMetric::from_parts(700, 1000);
        assert_eq!(metric.cap_height_ratio, 700.0);
    }

    #[test]
    fn garbage_bytes_fail_installation() {
        let err = FontMetric::from_font_bytes(&[0u8; 16], "junk").unwrap_err();
        assert!(matches!(err, DocError::FontInstallation { .. }));
    }
}
