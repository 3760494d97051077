//! URL recognition, reputation classification, and the scanner port.

pub mod classifier;
pub mod scanner;
pub mod url;

pub use scanner::UrlScanner;
