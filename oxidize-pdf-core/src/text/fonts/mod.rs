//! Font subsystem modules

pub mod embedding;
pub mod truetype;

#[cfg(test)]
mod truetype_test_utils;

pub use embedding::{EmbeddedFontData, EmbeddingOptions, FontEmbedder};
pub use truetype::{CmapSubtable, GlyphInfo, TrueTypeFont};
