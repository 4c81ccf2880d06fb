//! Pipeline constants and runtime configuration defaults

// Scanner sheet geometry: each scan holds a 5x4 grid of specimens
/// Default number of tile rows per scanned sheet
pub const DEFAULT_GRID_ROWS: usize = 5;
/// Default number of tile columns per scanned sheet
pub const DEFAULT_GRID_COLS: usize = 4;

// Scanner-bed artifact band along specific tile positions
/// Default width in pixels of the trimmed artifact band
pub const DEFAULT_BAND_WIDTH: usize = 28;
/// Tile-index modulus selecting the top physical sheet row
pub const TOP_BAND_MODULUS: usize = 20;
/// Largest remainder that still falls in the top sheet row
pub const TOP_BAND_REMAINDER_MAX: usize = 3;
/// Tile-index modulus selecting the rightmost grid column
pub const RIGHT_BAND_MODULUS: usize = 4;
/// Remainder identifying the rightmost grid column
pub const RIGHT_BAND_REMAINDER: usize = 3;

// Background suppression tuning
/// Gaussian smoothing sigma applied to the edge-magnitude field
pub const BACKGROUND_SIGMA: f64 = 12.0;
/// Smoothed-activity value at or below which a pixel is background
pub const BACKGROUND_THRESHOLD: f64 = 0.016;
/// Gaussian kernel extent in standard deviations
pub const GAUSSIAN_TRUNCATE: f64 = 4.0;

// Texture feature extraction
/// Luminance weights for the red, green and blue channels
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2125, 0.7154, 0.0721];
/// Number of quantized gray levels in the co-occurrence matrix
pub const GRAY_LEVELS: usize = 256;
/// Pixel offset distance for co-occurrence pairs
pub const GLCM_DISTANCE: usize = 1;

/// File extensions recognized as scanned images
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "tif"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
