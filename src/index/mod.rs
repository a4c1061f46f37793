pub mod annotator;
pub mod key;
