//! # oxidize-pdf-api
//!
//! REST API server for oxidize-pdf - provides HTTP endpoints for PDF generation and manipulation.
//!
//! ## Overview
//!
//! oxidize-pdf-api is a lightweight, fast REST API server that exposes the functionality
//! of the oxidize-pdf library through HTTP endpoints. It's designed for microservice
//! architectures and web applications that need PDF generation capabilities.
//!
//! ## Features
//!
//! - **Simple PDF Generation**: Create PDFs from text via REST API
//! - **CORS Support**: Ready for browser-based applications
//! - **Health Checks**: Built-in monitoring endpoint
//! - **Error Handling**: Structured error responses
//! - **Zero Configuration**: Works out of the box
//!
//! ## Quick Start
//!
//! ### Running the Server
//!
//! ```bash
//! # Install and run
//! cargo install oxidize-pdf-api
//! oxidize-pdf-api
//!
//! # Or run from source
//! cargo run -p oxidize-pdf-api
//! ```
//!
//! The server starts on `http://0.0.0.0:3000` by default.
//!
//! ### Basic Usage
//!
//! Create a PDF:
//! ```bash
//! curl -X POST http://localhost:3000/api/create \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "Hello, World!", "font_size": 24}' \
//!   --output hello.pdf
//! ```
//!
//! Check health:
//! ```bash
//! curl http://localhost:3000/api/health
//! ```
//!
//! ## API Reference
//!
//! ### POST /api/create
//!
//! Create a PDF document with the specified text.
//!
//! **Request Body:**
//! ```json
//! {
//!   "text": "Your text content here",
//!   "font_size": 24.0  // Optional, defaults to 24
//! }
//! ```
//!
//! **Response:**
//! - Success: 200 OK with PDF binary data
//! - Error: 500 Internal Server Error with error message
//!
//! **Example:**
//! ```bash
//! curl -X POST http://localhost:3000/api/create \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "Annual Report 2025", "font_size": 36}' \
//!   --output report.pdf
//! ```
//!
//! ### GET /api/health
//!
//! Health check endpoint for monitoring.
//!
//! **Response:**
//! ```json
//! {
//!   "status": "ok",
//!   "service": "oxidizePdf API",
//!   "version": "0.1.2"
//! }
//! ```
//!
//! ## Configuration
//!
//! ### Environment Variables
//!
//! - `RUST_LOG`: Set logging level (default: `oxidize_pdf_api=debug,tower_http=debug`)
//! - `PORT`: Server port (default: 3000) - not implemented yet
//!
//! ### CORS
//!
//! CORS is enabled by default with permissive settings. In production, you should
//! configure appropriate CORS policies.
//!
//! ## Integration Examples
//!
//! ### JavaScript/Fetch
//!
//! ```javascript
//! async function createPdf(text) {
//!   const response = await fetch('http://localhost:3000/api/create', {
//!     method: 'POST',
//!     headers: { 'Content-Type': 'application/json' },
//!     body: JSON.stringify({ text, font_size: 24 })
//!   });
//!   
//!   if (response.ok) {
//!     const blob = await response.blob();
//!     const url = URL.createObjectURL(blob);
//!     window.open(url);
//!   }
//! }
//! ```
//!
//! ### Python
//!
//! ```python
//! import requests
//!
//! response = requests.post(
//!     'http://localhost:3000/api/create',
//!     json={'text': 'Hello from Python!', 'font_size': 24}
//! )
//!
//! if response.status_code == 200:
//!     with open('output.pdf', 'wb') as f:
//!         f.write(response.content)
//! ```
//!
//! ## Error Handling
//!
//! All errors return a JSON response with the following structure:
//!
//! ```json
//! {
//!   "error": "Error description here"
//! }
//! ```
//!
//! Common errors:
//! - Invalid JSON in request body
//! - PDF generation failures
//! - File system errors
//!
//! ## Performance
//!
//! - Lightweight: Minimal memory footprint
//! - Fast: Sub-millisecond PDF generation for simple documents
//! - Scalable: Stateless design allows horizontal scaling
//!
//! ## Roadmap
//!
//! Future enhancements planned:
//! - Additional endpoints for merge, split, rotate operations
//! - Template support for complex layouts
//! - Batch processing endpoints
//! - WebSocket support for real-time generation
//! - Authentication and rate limiting
//!
//! ## License
//!
//! GPL v3.0 - See LICENSE file for details

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the oxidize-pdf API server.
///
/// Initializes logging, sets up routes, and starts the HTTP server on port 3000.
/// The server includes CORS support and structured error handling.
///
/// # Server Configuration
///
/// - **Address**: 0.0.0.0:3000 (accessible from all interfaces)
/// - **CORS**: Permissive (allow all origins, methods, headers)
/// - **Logging**: Configurable via RUST_LOG environment variable
///
/// # Routes
///
/// See [`oxidize_pdf_api::app`] for the full route table.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Controls logging level (default: debug)
///
/// # Example
///
/// ```bash
/// # Start server with custom logging
/// RUST_LOG=info cargo run -p oxidize-pdf-api
/// ```
#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oxidize_pdf_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = oxidize_pdf_api::app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();

    info!("oxidizePdf API listening on http://0.0.0.0:3000");

    axum::serve(listener, app).await.unwrap();
}
