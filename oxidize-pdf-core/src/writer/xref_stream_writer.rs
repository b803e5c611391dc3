//! XRef Stream Writer for PDF 1.5+
//!
//! This module implements writing cross-reference streams according to
//! ISO 32000-1:2008 Section 7.5.8.

use crate::error::Result;
use crate::objects::{Dictionary, Object, ObjectId};
use crate::parser::xref_stream::XRefEntry;
use std::io::Write;

/// Helper function to write object values
fn write_object_value<W: Write>(writer: &mut W, object: &Object) -> Result<()> {
    match object {
        Object::Null => write!(writer, "null")?,
        Object::Boolean(b) => write!(writer, "{}", if *b { "true" } else { "false" })?,
        Object::Integer(i) => write!(writer, "{}", i)?,
        Object::Real(f) => write!(writer, "{:.6}", f)?,
        Object::String(s) => {
            write!(writer, "(")?;
            writer.write_all(s.as_bytes())?;
            write!(writer, ")")?;
        }
        Object::Name(n) => write!(writer, "/{}", n)?,
        Object::Array(arr) => {
            write!(writer, "[")?;
            for (i, obj) in arr.iter().enumerate() {
                if i > 0 {
                    write!(writer, " ")?;
                }
                write_object_value(writer, obj)?;
            }
            write!(writer, "]")?;
        }
        Object::Dictionary(dict) => {
            write!(writer, "<<")?;
            for (key, value) in dict.iter() {
                write!(writer, " /{} ", key)?;
                write_object_value(writer, value)?;
            }
            write!(writer, " >>")?;
        }
        Object::Reference(id) => write!(writer, "{} {} R", id.number(), id.generation())?,
        _ => {
            return Err(crate::error::PdfError::InvalidStructure(
                "Cannot write stream object directly".to_string(),
            ))
        }
    }
    Ok(())
}

/// Writer for XRef streams
pub struct XRefStreamWriter {
    /// Entries to be written
    entries: Vec<XRefEntry>,
    /// Field widths [type, field2, field3]
    widths: [usize; 3],
    /// Object ID for this XRef stream
    stream_id: ObjectId,
    /// Trailer information
    root_id: Option<ObjectId>,
    info_id: Option<ObjectId>,
}

impl XRefStreamWriter {
    /// Create a new XRef stream writer
    pub fn new(stream_id: ObjectId) -> Self {
        Self {
            entries: Vec::new(),
            // Default widths: 1 byte for type, 3 bytes for offsets, 2 bytes for generation
            widths: [1, 3, 2],
            stream_id,
            root_id: None,
            info_id: None,
        }
    }

    /// Set trailer information
    pub fn set_trailer_info(&mut self, root_id: ObjectId, info_id: ObjectId) {
        self.root_id = Some(root_id);
        self.info_id = Some(info_id);
    }

    /// Add a free entry
    pub fn add_free_entry(&mut self, next_free: u32, generation: u16) {
        self.entries.push(XRefEntry::Free {
            next_free_object: next_free,
            generation,
        });
    }

    /// Add an in-use entry
    pub fn add_in_use_entry(&mut self, offset: u64, generation: u16) {
        self.entries.push(XRefEntry::InUse { offset, generation });

        // Update widths if needed
        let offset_bytes = Self::bytes_needed(offset);
        if offset_bytes > self.widths[1] {
            self.widths[1] = offset_bytes;
        }
    }

    /// Add a compressed entry
    pub fn add_compressed_entry(&mut self, stream_object_number: u32, index: u32) {
        self.entries.push(XRefEntry::Compressed {
            stream_object_number,
            index_within_stream: index,
        });

        // Update widths if needed
        let stream_bytes = Self::bytes_needed(stream_object_number as u64);
        if stream_bytes > self.widths[1] {
            self.widths[1] = stream_bytes;
        }

        let index_bytes = Self::bytes_needed(index as u64);
        if index_bytes > self.widths[2] {
            self.widths[2] = index_bytes;
        }
    }

    /// Calculate minimum bytes needed to represent a value
    fn bytes_needed(value: u64) -> usize {
        if value == 0 {
            1
        } else {
            ((value.ilog2() / 8) + 1) as usize
        }
    }

    /// Encode entries into binary data
    pub fn encode_entries(&self) -> Vec<u8> {
        let mut data = Vec::new();

        for entry in &self.entries {
            match entry {
                XRefEntry::Free {
                    next_free_object,
                    generation,
                } => {
                    // Type 0: free object
                    Self::write_field(&mut data, 0, self.widths[0]);
                    Self::write_field(&mut data, *next_free_object as u64, self.widths[1]);
                    Self::write_field(&mut data, *generation as u64, self.widths[2]);
                }
                XRefEntry::InUse { offset, generation } => {
                    // Type 1: in-use object
                    Self::write_field(&mut data, 1, self.widths[0]);
                    Self::write_field(&mut data, *offset, self.widths[1]);
                    Self::write_field(&mut data, *generation as u64, self.widths[2]);
                }
                XRefEntry::Compressed {
                    stream_object_number,
                    index_within_stream,
                } => {
                    // Type 2: compressed object
                    Self::write_field(&mut data, 2, self.widths[0]);
                    Self::write_field(&mut data, *stream_object_number as u64, self.widths[1]);
                    Self::write_field(&mut data, *index_within_stream as u64, self.widths[2]);
                }
            }
        }

        data
    }

    /// Write a field with the specified width
    fn write_field(data: &mut Vec<u8>, value: u64, width: usize) {
        for i in (0..width).rev() {
            data.push(((value >> (i * 8)) & 0xFF) as u8);
        }
    }

    /// Create the XRef stream dictionary
    pub fn create_dictionary(&self, prev_xref: Option<u64>) -> Dictionary {
        let mut dict = Dictionary::new();

        // Required entries
        dict.set("Type", Object::Name("XRef".to_string()));
        dict.set("Size", Object::Integer(self.entries.len() as i64));

        // Trailer entries (Root and Info)
        if let Some(root_id) = self.root_id {
            dict.set("Root", Object::Reference(root_id));
        }
        if let Some(info_id) = self.info_id {
            dict.set("Info", Object::Reference(info_id));
        }

        // W array specifying field widths
        dict.set(
            "W",
            Object::Array(vec![
                Object::Integer(self.widths[0] as i64),
                Object::Integer(self.widths[1] as i64),
                Object::Integer(self.widths[2] as i64),
            ]),
        );

        // Index array (default is [0 Size])
        dict.set(
            "Index",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(self.entries.len() as i64),
            ]),
        );

        // Filter (always use FlateDecode for compression)
        dict.set("Filter", Object::Name("FlateDecode".to_string()));

        // Previous xref offset if this is an incremental update
        if let Some(prev) = prev_xref {
            dict.set("Prev", Object::Integer(prev as i64));
        }

        dict
    }

    /// Write the complete XRef stream object
    pub fn write_xref_stream<W: Write>(
        &self,
        writer: &mut W,
        _stream_position: u64,
        prev_xref: Option<u64>,
    ) -> Result<()> {
        // Encode the entries
        let uncompressed_data = self.encode_entries();

        // Compress with FlateDecode
        let compressed_data = crate::compression::compress(&uncompressed_data)?;

        // Create the stream dictionary
        let mut dict = self.create_dictionary(prev_xref);
        dict.set("Length", Object::Integer(compressed_data.len() as i64));

        // Write the object header
        writeln!(
            writer,
            "{} {} obj",
            self.stream_id.number(),
            self.stream_id.generation()
        )?;

        // Write the dictionary as a stream dictionary
        write!(writer, "<<")?;
        for (key, value) in dict.iter() {
            write!(writer, "\n/{} ", key)?;
            write_object_value(writer, value)?;
        }
        write!(writer, "\n>>")?;

        // Write the stream
        writeln!(writer, "\nstream")?;
        writer.write_all(&compressed_data)?;
        writeln!(writer, "\nendstream")?;
        writeln!(writer, "endobj")?;

        Ok(())
    }

    /// Get the number of entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Get the stream object ID
    pub fn stream_id(&self) -> ObjectId {
        self.stream_id
    }
}
