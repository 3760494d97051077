//! Translation request parsing and the translation collaborator port.

pub mod languages;
pub mod parser;
pub mod provider;

pub use languages::LanguageTable;
pub use provider::TranslationProvider;
