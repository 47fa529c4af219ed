pub mod decode;
pub mod types;

pub use decode::{decode_line, Decoded};
pub use types::*;
