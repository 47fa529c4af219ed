mod host_index;

pub use host_index::HostIndex;
