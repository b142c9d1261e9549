//! Domain models for the citation network
//!
//! Plain serializable types shared by the engine and its embedders:
//! sources, citations, and detected echo chambers.

mod chamber;
mod citation;
mod source;

pub use chamber::EchoChamber;
pub use citation::{Citation, CitationType};
pub use source::{BiasLabel, Source};
