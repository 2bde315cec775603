//! Port definitions: trait seams implemented by adapter crates.
//!
//! # Design Rules
//!
//! - Ports carry only domain types from this crate; no HTTP or audio types.
//! - Adapters convert their transport errors into the port's error enum.

mod speech;

pub use speech::{SpeechSynthesizer, SynthesisError};
