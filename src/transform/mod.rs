mod transformer;

pub use transformer::{RecordTransformer, TransformStats};
