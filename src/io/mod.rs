//! Document construction from strings, readers and files

pub mod reader;

pub use reader::{convenience, DocumentFormat, DocumentReader, ReaderConfig};
