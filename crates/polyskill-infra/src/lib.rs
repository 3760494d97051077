//! Infrastructure implementations of the Polyskill collaborator ports.
//!
//! Each module wraps one external HTTP service behind the matching
//! polyskill-core trait: VirusTotal for URL reputation, MyMemory for
//! translation, and the Yandex geocoder / static-map / weather /
//! dialogs-image APIs for the weather and maps states. Configuration
//! and secret loading live in [`config`].

pub mod config;
pub mod mymemory;
pub mod virustotal;
pub mod yandex;

pub(crate) mod http;
