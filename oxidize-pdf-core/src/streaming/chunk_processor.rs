//! Chunk-based content processing for streaming operations
//!
//! Processes PDF content in manageable chunks to maintain
//! memory efficiency while handling large documents.

use crate::error::Result;
use std::io::Read;

/// Type of content chunk
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkType {
    /// Text content
    Text,
    /// Image data
    Image,
    /// Vector graphics
    Graphics,
    /// Form XObject
    Form,
    /// Unknown or mixed content
    Unknown,
}

/// A chunk of PDF content
#[derive(Debug, Clone)]
pub struct ContentChunk {
    /// Type of content in this chunk
    pub chunk_type: ChunkType,
    /// Raw data of the chunk
    pub data: Vec<u8>,
    /// Position in the document
    pub position: u64,
    /// Size of the chunk
    pub size: usize,
    /// Page number this chunk belongs to
    pub page_number: u32,
}

impl ContentChunk {
    /// Create a new content chunk
    pub fn new(chunk_type: ChunkType, data: Vec<u8>, position: u64, page_number: u32) -> Self {
        let size = data.len();
        Self {
            chunk_type,
            data,
            position,
            size,
            page_number,
        }
    }

    /// Check if this is a text chunk
    pub fn is_text(&self) -> bool {
        self.chunk_type == ChunkType::Text
    }

    /// Check if this is an image chunk
    pub fn is_image(&self) -> bool {
        self.chunk_type == ChunkType::Image
    }

    /// Get the chunk data as a string (for text chunks)
    pub fn as_text(&self) -> Option<String> {
        if self.is_text() {
            Some(String::from_utf8_lossy(&self.data).to_string())
        } else {
            None
        }
    }
}

/// Options for chunk processing
#[derive(Debug, Clone)]
pub struct ChunkOptions {
    /// Maximum size of a single chunk
    pub max_chunk_size: usize,
    /// Whether to split large objects
    pub split_large_objects: bool,
    /// Buffer size for reading
    pub buffer_size: usize,
    /// Types of chunks to process
    pub chunk_types: Vec<ChunkType>,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: 1024 * 1024, // 1MB
            split_large_objects: true,
            buffer_size: 64 * 1024, // 64KB
            chunk_types: vec![
                ChunkType::Text,
                ChunkType::Image,
                ChunkType::Graphics,
                ChunkType::Form,
            ],
        }
    }
}

/// Processes PDF content in chunks
pub struct ChunkProcessor {
    options: ChunkOptions,
    current_position: u64,
    current_page: u32,
}

impl ChunkProcessor {
    /// Create a new chunk processor
    pub fn new(options: ChunkOptions) -> Self {
        Self {
            options,
            current_position: 0,
            current_page: 0,
        }
    }

    /// Process content and yield chunks
    pub fn process_content(&mut self, content: &[u8]) -> Result<Vec<ContentChunk>> {
        let mut chunks = Vec::new();
        let mut offset = 0;

        while offset < content.len() {
            let remaining = content.len() - offset;
            let chunk_size = remaining.min(self.options.max_chunk_size);

            // Detect chunk type (simplified)
            let chunk_type = self.detect_chunk_type(&content[offset..offset + chunk_size]);

            // Skip if not in requested types
            if !self.options.chunk_types.contains(&chunk_type) {
                offset += chunk_size;
                continue;
            }

            let chunk = ContentChunk::new(
                chunk_type,
                content[offset..offset + chunk_size].to_vec(),
                self.current_position + offset as u64,
                self.current_page,
            );

            chunks.push(chunk);
            offset += chunk_size;
        }

        self.current_position += content.len() as u64;
        Ok(chunks)
    }

    /// Set the current page number
    pub fn set_page(&mut self, page_number: u32) {
        self.current_page = page_number;
    }

    /// Reset the processor state
    pub fn reset(&mut self) {
        self.current_position = 0;
        self.current_page = 0;
    }

    fn detect_chunk_type(&self, data: &[u8]) -> ChunkType {
        // Simple heuristic for chunk type detection
        if data.starts_with(b"BT") || data.contains(&b'T') && data.contains(&b'j') {
            ChunkType::Text
        } else if data.starts_with(b"\xFF\xD8") || data.starts_with(b"\x89PNG") {
            ChunkType::Image
        } else if data.contains(&b'm') || data.contains(&b'l') || data.contains(&b'c') {
            ChunkType::Graphics
        } else {
            ChunkType::Unknown
        }
    }
}

/// Process a reader in chunks
pub fn process_in_chunks<R, F>(mut reader: R, options: ChunkOptions, mut callback: F) -> Result<()>
where
    R: Read,
    F: FnMut(ContentChunk) -> Result<()>,
{
    let mut processor = ChunkProcessor::new(options.clone());
    let mut buffer = vec![0u8; options.buffer_size];
    let mut _position = 0u64;

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break, // EOF
            Ok(n) => {
                let chunks = processor.process_content(&buffer[..n])?;
                for chunk in chunks {
                    callback(chunk)?;
                }
                _position += n as u64;
            }
            Err(e) => return Err(crate::error::PdfError::Io(e)),
        }
    }

    Ok(())
}
