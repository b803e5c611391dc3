use axum::{
    extract::{Json, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use oxidize_pdf::operations::{merge_pdfs, MergeInput, MergeOptions};
use oxidize_pdf::template_model::{generate, GeneratorOptions, Template};
use oxidize_pdf::{Document, Font, FormFiller, Page, RedactionRequest, Redactor, XfdfDocument};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

/// Request payload for PDF creation endpoint.
///
/// Contains the text content and optional formatting options for generating a PDF.
///
/// # Examples
///
/// ```json
/// {
///   "text": "Hello, World!",
///   "font_size": 24.0
/// }
/// ```
///
/// ```json
/// {
///   "text": "Simple text with default font size"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreatePdfRequest {
    /// Text content to include in the PDF
    pub text: String,
    /// Font size in points (defaults to 24.0 if not specified)
    pub font_size: Option<f64>,
}

/// Standard error response structure.
///
/// Used for all API error responses to provide consistent error reporting.
///
/// # Example Response
///
/// ```json
/// {
///   "error": "Failed to generate PDF: Invalid text encoding"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Build the application router with all routes configured.
///
/// This function creates the main application router with all endpoints
/// and middleware configured. Useful for both the main server and testing.
///
/// # Routes
///
/// - `POST /api/create` - Create PDF from text
/// - `GET /api/health` - Health check endpoint
/// - `POST /api/extract` - Extract text from PDF
/// - `POST /api/merge` - Merge uploaded PDFs
/// - `POST /generate` - Generate a PDF from a [`Template`] document
/// - `POST /fill-form` - Fill AcroForm fields from an XFDF document
/// - `POST /redact` - Redact text/regions from an uploaded PDF
/// - `GET /inspect` - Report page dimensions and redaction capability
///
/// # Middleware
///
/// - CORS: Permissive configuration for development
pub fn app() -> Router {
    Router::new()
        .route("/api/create", post(create_pdf))
        .route("/api/health", get(health_check))
        .route("/api/extract", post(extract_text))
        .route("/api/merge", post(merge_pdfs_handler))
        .route("/generate", post(generate_pdf))
        .route("/fill-form", post(fill_form))
        .route("/redact", post(redact))
        .route("/inspect", get(inspect))
        .layer(CorsLayer::permissive())
}

/// Create a PDF document from the provided text content.
///
/// This endpoint generates a PDF with the specified text using Helvetica font.
/// The PDF is returned as binary data with appropriate headers for download.
///
/// # Request
///
/// - **Method**: POST
/// - **Content-Type**: application/json
/// - **Body**: [`CreatePdfRequest`] with text and optional font size
///
/// # Response
///
/// - **Success**: 200 OK with PDF binary data
/// - **Content-Type**: application/pdf
/// - **Content-Disposition**: attachment; filename="generated.pdf"
///
/// # Errors
///
/// Returns 500 Internal Server Error with [`ErrorResponse`] for:
/// - PDF generation failures
/// - File system errors
/// - Invalid text content
///
/// # Examples
///
/// ```bash
/// # Create simple PDF
/// curl -X POST http://localhost:3000/api/create \
///   -H "Content-Type: application/json" \
///   -d '{"text": "Hello, World!"}' \
///   --output hello.pdf
///
/// # Create PDF with custom font size
/// curl -X POST http://localhost:3000/api/create \
///   -H "Content-Type: application/json" \
///   -d '{"text": "Large Text", "font_size": 48}' \
///   --output large.pdf
/// ```
pub async fn create_pdf(Json(payload): Json<CreatePdfRequest>) -> Result<Response, AppError> {
    let mut doc = Document::new();
    let mut page = Page::a4();

    let font_size = payload.font_size.unwrap_or(24.0);

    page.text()
        .set_font(Font::Helvetica, font_size)
        .at(50.0, 750.0)
        .write(&payload.text)?;

    doc.add_page(page);

    // Generate PDF directly to buffer
    let mut pdf_bytes = Vec::new();
    doc.write(&mut pdf_bytes)?;

    Ok((
        StatusCode::OK,
        [
            ("Content-Type", "application/pdf"),
            (
                "Content-Disposition",
                "attachment; filename=\"generated.pdf\"",
            ),
        ],
        pdf_bytes,
    )
        .into_response())
}

/// Health check endpoint for monitoring and load balancing.
///
/// Returns service status, name, and version information.
/// This endpoint can be used by load balancers, monitoring systems,
/// and orchestrators to verify service health.
///
/// # Response
///
/// Always returns 200 OK with JSON containing:
/// - `status`: Always "ok" if service is running
/// - `service`: Service name "oxidizePdf API"
/// - `version`: Current package version
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/api/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "ok",
///   "service": "oxidizePdf API",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "oxidizePdf API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Application-specific error types for the API.
///
/// Represents all possible errors that can occur during API operations.
/// Each error type is automatically converted to an appropriate HTTP response.
///
/// # Error Types
///
/// - [`AppError::Pdf`]: PDF generation or processing errors
/// - [`AppError::Io`]: File system or I/O errors
///
/// # HTTP Status Codes
///
/// All errors currently return 500 Internal Server Error with a JSON error message.
/// Future versions may implement more specific status codes.
#[derive(Debug)]
pub enum AppError {
    /// PDF library errors (generation, parsing, etc.)
    Pdf(oxidize_pdf::PdfError),
    /// I/O errors (file operations, network, etc.)
    Io(std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_msg) = match &self {
            AppError::Pdf(e) => (pdf_error_status(e), e.to_string()),
            AppError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let error_response = ErrorResponse { error: error_msg };
        (status, Json(error_response)).into_response()
    }
}

/// Maps a [`oxidize_pdf::PdfError`] to the status code table (§7): 400 for
/// malformed input the caller can fix, 415 for an unsupported input format,
/// 422 for a request that is well-formed but cannot be satisfied, 500 for
/// everything else.
fn pdf_error_status(err: &oxidize_pdf::PdfError) -> StatusCode {
    use oxidize_pdf::PdfError;
    match err {
        PdfError::InvalidTemplate(_) => StatusCode::BAD_REQUEST,
        PdfError::UnsupportedFontFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        PdfError::UnsupportedPages(_) | PdfError::LayoutTooLarge(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PdfError::MalformedPDF(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<oxidize_pdf::PdfError> for AppError {
    fn from(err: oxidize_pdf::PdfError) -> Self {
        AppError::Pdf(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

/// Response for text extraction endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractTextResponse {
    /// Extracted text from the PDF
    pub text: String,
    /// Number of pages processed
    pub pages: usize,
}

/// Extract text from an uploaded PDF file.
///
/// This endpoint accepts a PDF file upload and extracts all text content.
///
/// # Request
///
/// - **Method**: POST
/// - **Content-Type**: multipart/form-data
/// - **Body**: PDF file upload with field name "file"
///
/// # Response
///
/// - **Success**: 200 OK with extracted text
/// - **Error**: 400 Bad Request for invalid uploads
/// - **Error**: 500 Internal Server Error for extraction failures
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:3000/api/extract \
///   -F "file=@document.pdf" \
///   -o extracted.json
/// ```
pub async fn extract_text(mut multipart: Multipart) -> Result<Response, AppError> {
    let mut pdf_data = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Failed to read multipart field: {e}"),
        ))
    })? {
        if field.name() == Some("file") {
            pdf_data = Some(field.bytes().await.map_err(|e| {
                AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Failed to read file data: {e}"),
                ))
            })?);
            break;
        }
    }

    let pdf_bytes = pdf_data.ok_or_else(|| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "No file provided in upload",
        ))
    })?;

    // Parse PDF and extract text
    use oxidize_pdf::parser::{document::PdfDocument, reader::PdfReader};
    use std::io::Cursor;

    let cursor = Cursor::new(pdf_bytes.as_ref());
    let reader = PdfReader::new(cursor).map_err(|e| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Failed to parse PDF: {e:?}"),
        ))
    })?;
    let doc = PdfDocument::new(reader);

    let extracted_texts = doc.extract_text().map_err(|e| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Failed to extract text: {e:?}"),
        ))
    })?;

    // Combine all extracted text
    let text = extracted_texts
        .into_iter()
        .map(|et| et.text)
        .collect::<Vec<_>>()
        .join("\n");

    let page_count = doc.page_count().unwrap_or(0) as usize;

    let response = ExtractTextResponse {
        text,
        pages: page_count,
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Generate a PDF from a declarative [`Template`] JSON document.
///
/// # Request
///
/// - **Method**: POST
/// - **Content-Type**: application/json
/// - **Body**: a `Template` document (§4.10)
///
/// # Response
///
/// - **Success**: 200 OK, `application/pdf`
/// - **Error**: 400 for `InvalidTemplate`, 422 for `LayoutTooLarge`, 500 otherwise
pub async fn generate_pdf(Json(template): Json<Template>) -> Result<Response, AppError> {
    let pdf_bytes = generate(&template, &GeneratorOptions::default())?;

    Ok((
        StatusCode::OK,
        [
            ("Content-Type", "application/pdf"),
            (
                "Content-Disposition",
                "attachment; filename=\"generated.pdf\"",
            ),
        ],
        pdf_bytes,
    )
        .into_response())
}

async fn multipart_field_bytes(
    multipart: &mut Multipart,
    name: &str,
) -> Result<Option<axum::body::Bytes>, AppError> {
    let mut found = None;
    loop {
        let Some(field) = multipart.next_field().await.map_err(|e| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("failed to read multipart field: {e}"),
            ))
        })?
        else {
            break;
        };
        if field.name() == Some(name) {
            found = Some(field.bytes().await.map_err(|e| {
                AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("failed to read field '{name}': {e}"),
                ))
            })?);
            break;
        }
    }
    Ok(found)
}

/// Fills an uploaded PDF's AcroForm fields from an uploaded XFDF values
/// document.
///
/// # Request
///
/// - **Method**: POST
/// - **Content-Type**: multipart/form-data, fields `pdf` and `xfdf`
///
/// # Response
///
/// Header `X-Fill-Report` carries the [`oxidize_pdf::FillReport`] as JSON;
/// the body is the filled PDF bytes.
pub async fn fill_form(mut multipart: Multipart) -> Result<Response, AppError> {
    let pdf_bytes = multipart_field_bytes(&mut multipart, "pdf")
        .await?
        .ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "missing 'pdf' field",
            ))
        })?;
    let xfdf_bytes = multipart_field_bytes(&mut multipart, "xfdf")
        .await?
        .ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "missing 'xfdf' field",
            ))
        })?;

    let values = XfdfDocument::parse(&xfdf_bytes).map_err(|e| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid XFDF: {e}"),
        ))
    })?;
    let (filled_bytes, report) =
        FormFiller::fill(&pdf_bytes, &values).map_err(oxidize_pdf::PdfError::from)?;

    respond_with_report(filled_bytes, "X-Fill-Report", &report, "filled.pdf")
}

/// Redacts an uploaded PDF according to an uploaded redaction request.
///
/// # Request
///
/// - **Method**: POST
/// - **Content-Type**: multipart/form-data, fields `pdf` and `request`
///   (a [`RedactionRequest`] JSON document, §4.8/§6.1)
///
/// # Response
///
/// Header `X-Redaction-Report` carries the [`oxidize_pdf::RedactionReport`]
/// as JSON; the body is the redacted PDF bytes.
pub async fn redact(mut multipart: Multipart) -> Result<Response, AppError> {
    let pdf_bytes = multipart_field_bytes(&mut multipart, "pdf")
        .await?
        .ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "missing 'pdf' field",
            ))
        })?;
    let request_bytes = multipart_field_bytes(&mut multipart, "request")
        .await?
        .ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "missing 'request' field",
            ))
        })?;

    let request: RedactionRequest = serde_json::from_slice(&request_bytes).map_err(|e| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid redaction request: {e}"),
        ))
    })?;
    let (redacted_bytes, report) =
        Redactor::apply_request(&pdf_bytes, &request).map_err(oxidize_pdf::PdfError::from)?;

    respond_with_report(redacted_bytes, "X-Redaction-Report", &report, "redacted.pdf")
}

fn respond_with_report<R: Serialize>(
    pdf_bytes: Vec<u8>,
    header_name: &'static str,
    report: &R,
    filename: &str,
) -> Result<Response, AppError> {
    let report_json = serde_json::to_string(report).map_err(|e| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("failed to serialize report: {e}"),
        ))
    })?;

    let response = axum::http::Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/pdf")
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .header(header_name, report_json)
        .body(axum::body::Body::from(pdf_bytes))
        .map_err(|e| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("failed to build response: {e}"),
            ))
        })?;

    Ok(response.into_response())
}

/// Reports page dimensions and per-page redaction capability for an
/// uploaded PDF, without writing any output.
///
/// # Request
///
/// - **Method**: GET
/// - **Content-Type**: multipart/form-data, field `pdf`
///
/// # Response
///
/// 200 OK with an [`oxidize_pdf::InspectReport`] as JSON.
pub async fn inspect(mut multipart: Multipart) -> Result<Response, AppError> {
    let pdf_bytes = multipart_field_bytes(&mut multipart, "pdf")
        .await?
        .ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "missing 'pdf' field",
            ))
        })?;

    let report = Redactor::inspect(&pdf_bytes, false).map_err(oxidize_pdf::PdfError::from)?;
    Ok((StatusCode::OK, Json(report)).into_response())
}

/// Response for the merge endpoint, carried in the `X-Merge-Info` header.
#[derive(Debug, Serialize, Deserialize)]
pub struct MergePdfResponse {
    /// Number of input files merged
    pub files_merged: usize,
    /// Human-readable confirmation message
    pub message: String,
}

/// Placeholder request type kept for API symmetry with the other JSON
/// endpoints; the merge endpoint itself takes file uploads via multipart,
/// not a JSON body, so this carries no fields yet beyond page-range options.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MergePdfRequest {
    /// Page ranges to include per file, in upload order (all pages if absent)
    pub page_ranges: Option<Vec<String>>,
}

/// Merges multiple uploaded PDF files into one.
///
/// # Request
///
/// - **Method**: POST
/// - **Content-Type**: multipart/form-data, repeated `files` fields in the
///   order they should be merged
///
/// # Response
///
/// - **Success**: 200 OK, `application/pdf`, header `X-Merge-Info` with a
///   [`MergePdfResponse`] as JSON
pub async fn merge_pdfs_handler(mut multipart: Multipart) -> Result<Response, AppError> {
    let mut temp_paths = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("failed to read multipart field: {e}"),
        ))
    })? {
        if field.name() != Some("files") {
            continue;
        }
        let bytes = field.bytes().await.map_err(|e| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("failed to read uploaded file: {e}"),
            ))
        })?;
        let path = unique_temp_path(temp_paths.len());
        std::fs::write(&path, &bytes)?;
        temp_paths.push(path);
    }

    if temp_paths.len() < 2 {
        for path in &temp_paths {
            let _ = std::fs::remove_file(path);
        }
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "At least 2 PDF files are required",
        )));
    }

    let inputs: Vec<MergeInput> = temp_paths.iter().cloned().map(MergeInput::new).collect();
    let output_path = unique_temp_path(temp_paths.len());
    let merge_result = merge_pdfs(inputs, &output_path, MergeOptions::default());

    for path in &temp_paths {
        let _ = std::fs::remove_file(path);
    }

    merge_result.map_err(|e| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("merge failed: {e}"),
        ))
    })?;

    let merged_bytes = std::fs::read(&output_path)?;
    let _ = std::fs::remove_file(&output_path);

    let response = MergePdfResponse {
        files_merged: temp_paths.len(),
        message: "PDFs merged successfully".to_string(),
    };
    let response_json = serde_json::to_string(&response).unwrap_or_default();

    let built = axum::http::Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/pdf")
        .header(
            "Content-Disposition",
            "attachment; filename=\"merged.pdf\"",
        )
        .header("X-Merge-Info", response_json)
        .body(axum::body::Body::from(merged_bytes))
        .map_err(|e| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("failed to build response: {e}"),
            ))
        })?;

    Ok(built.into_response())
}

fn unique_temp_path(index: usize) -> std::path::PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("oxidizepdf_merge_{stamp}_{index}.pdf"))
}
