pub mod binning;
pub mod correlation;
pub mod filter;

pub use binning::{bin_longitudes, drop_nan_bins};
pub use correlation::{calc_corr, inverse_corr, sine_longitude};
pub use filter::{filter_longitude, LongitudeWindow};
