pub mod error;
pub mod export;
pub mod load;
pub mod record;
pub mod repair;
pub mod report;

pub use error::CleanseError;
pub use record::CustomerRecord;
