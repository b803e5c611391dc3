//! # oxidize-pdf-api
//!
//! REST API server for oxidize-pdf library
//!

mod api;
pub use api::{
    app,
    create_pdf,
    extract_text,
    fill_form,
    generate_pdf,
    health_check,
    inspect,
    // PDF Operations
    merge_pdfs_handler,
    redact,
    AppError,
    CreatePdfRequest,
    ErrorResponse,
    ExtractTextResponse,
    // Request/Response Types
    MergePdfRequest,
    MergePdfResponse,
};
