// Caller-side checks: raw strings in, a validated ConversionRequest out

pub mod error;
pub mod input;
pub mod validation;

pub use error::RequestError;
pub use input::RequestInput;
pub use validation::{parse_bias, ConversionRequest, SizeRange};
