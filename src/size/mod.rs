// Free-form size strings: "3", "12.5", ".5", "7/32", "1-1/4", "1 3/8"

pub mod error;
pub mod parser;

pub use error::SizeParseError;
pub use parser::parse_size;
