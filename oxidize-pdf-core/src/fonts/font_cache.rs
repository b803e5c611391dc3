//! Font caching for efficient font management

use super::Font;
use crate::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe font cache
#[derive(Debug, Clone)]
pub struct FontCache {
    fonts: Arc<RwLock<HashMap<String, Arc<Font>>>>,
}

impl FontCache {
    /// Create a new font cache
    pub fn new() -> Self {
        FontCache {
            fonts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a font to the cache
    pub fn add_font(&self, name: impl Into<String>, font: Font) -> Result<()> {
        let name = name.into();
        let mut fonts = self.fonts.write().unwrap();
        fonts.insert(name, Arc::new(font));
        Ok(())
    }

    /// Get a font from the cache
    pub fn get_font(&self, name: &str) -> Option<Arc<Font>> {
        let fonts = self.fonts.read().unwrap();
        fonts.get(name).cloned()
    }

    /// Check if a font exists in the cache
    pub fn has_font(&self, name: &str) -> bool {
        let fonts = self.fonts.read().unwrap();
        fonts.contains_key(name)
    }

    /// Get all font names in the cache
    pub fn font_names(&self) -> Vec<String> {
        let fonts = self.fonts.read().unwrap();
        fonts.keys().cloned().collect()
    }

    /// Clear the cache
    pub fn clear(&self) {
        let mut fonts = self.fonts.write().unwrap();
        fonts.clear();
    }

    /// Get the number of cached fonts
    pub fn len(&self) -> usize {
        let fonts = self.fonts.read().unwrap();
        fonts.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        let fonts = self.fonts.read().unwrap();
        fonts.is_empty()
    }
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new()
    }
}
