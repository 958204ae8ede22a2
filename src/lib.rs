// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod client;
pub mod highlight;
pub mod lexicon;
pub mod poll;
pub mod render;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::highlight::{highlight, Highlighter, Polarity, Segment};
pub use crate::lexicon::Lexicon;
