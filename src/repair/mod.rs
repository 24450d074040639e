pub mod outliers;
pub mod similarity;
pub mod spelling;

pub use outliers::resolve_age_outliers;
pub use spelling::correct_country_spelling;
