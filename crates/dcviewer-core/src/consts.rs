/// Minimum pixel count (h*w) to use Rayon parallelism when stretching.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f32 = 1e-10;

/// Exponent `a` of the logarithmic stretch `ln(a*x + 1) / ln(a + 1)`.
pub const DEFAULT_LOG_EXPONENT: f32 = 1000.0;

/// Minimum drag span, in screen pixels, for a rectangle selection to count.
pub const DEFAULT_MIN_SPAN: f32 = 5.0;

/// FITS logical record size.
pub const FITS_BLOCK_SIZE: usize = 2880;

/// FITS header card size.
pub const FITS_CARD_SIZE: usize = 80;

/// Largest NAXIS the FITS standard allows.
pub const MAX_NAXIS: i64 = 999;

/// Release name shown next to the version in Help > About.
pub const RELEASE_NAME: &str = "Ordovician period";

/// Default license file shown by Help > License.
pub const DEFAULT_LICENSE_PATH: &str = "LICENSE";

/// Config file picked up from the working directory by the GUI.
pub const CONFIG_FILE_NAME: &str = "dcviewer.toml";
