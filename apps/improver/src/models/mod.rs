pub mod document;

pub use document::{ExtractedText, UploadedDocument};
