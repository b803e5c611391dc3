//! PDF writing functionality

mod pdf_writer;
mod xref_stream_writer;

pub use pdf_writer::{PdfWriter, WriterConfig};
pub use xref_stream_writer::XRefStreamWriter;
