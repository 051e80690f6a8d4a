//! I/O around the conversion core: decoding, encoding, single-file and batch runs.

pub mod batch;
pub mod convert;
pub mod sink;
pub mod source;
