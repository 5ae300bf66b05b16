use crate::style::FontStyle;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum DocError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    /// The font program for a family could not be parsed during installation
    #[error("could not install font family {family}: {source}")]
    FontInstallation {
        family: String,
        #[source]
        source: owned_ttf_parser::FaceParsingError,
    },

    /// The cap height / units-per-em metrics could not be extracted from a face
    #[error("font family {family} carries no usable cap height metric")]
    MetricParse { family: String },

    /// The requested (family, style) combination has no installed font program
    #[error("font family {family} is not installed for style {style:?}")]
    FontNotInstalled { family: String, style: FontStyle },

    /// A drawing call was made before any font family was installed
    #[error("no font family has been installed")]
    NoFontInstalled,

    /// A font size of zero was requested; sizes start at 1
    #[error("font size must be at least 1")]
    InvalidFontSize,
}
