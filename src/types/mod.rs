//! Request and response types for the holiday endpoints

pub mod holiday;
pub mod query;
pub mod response;

pub use holiday::Holiday;
pub use query::{HolidayOptions, QueryParams};
pub use response::{CheckHolidayResult, HolidaysResponse};
