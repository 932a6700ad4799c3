use thiserror::Error;

/// Failure to read a slice out of a cube file.
#[derive(Error, Debug)]
pub enum CubeReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FITS file: {0}")]
    InvalidFits(String),

    #[error("Unsupported BITPIX value: {0}")]
    UnsupportedBitpix(i64),

    #[error("Compressed FITS files are not supported ({0})")]
    Compressed(&'static str),

    #[error("Invalid cube dimensions: {0:?}")]
    InvalidDimensions(Vec<usize>),

    #[error("Wavelength index {index} out of range (planes: {total})")]
    WavelengthOutOfRange { index: i64, total: usize },
}

/// The renderer rejected the pixel data or transform.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Empty pixel data ({rows}x{cols})")]
    EmptyData { rows: usize, cols: usize },

    #[error("Pixel data has no finite values")]
    NoFiniteValues,

    #[error("Log stretch exponent must be positive and finite, got {0}")]
    InvalidExponent(f32),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Writing a rendered figure to disk failed.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Figure of {width}x{height} does not fit an image buffer")]
    Oversized { width: usize, height: usize },
}

pub type Result<T> = std::result::Result<T, CubeReadError>;
