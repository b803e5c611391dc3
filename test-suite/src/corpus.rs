//! Test Corpus Management
//! 
//! This module manages the collection of PDF test files used for validation,
//! including both internal fixtures and external test suites.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::fs;
use serde::{Deserialize, Serialize};
use anyhow::Result;

/// Categories of test PDFs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestCategory {
    /// Minimal valid PDFs
    Minimal,
    /// Standard PDFs with common features
    Standard,
    /// Complex PDFs with advanced features
    Complex,
    /// Edge cases that are still valid
    EdgeCases,
    /// Corrupted PDFs
    Corrupted,
    /// Malformed PDFs with structural issues
    Malformed,
    /// PDFs with security issues
    Security,
    /// External test suite PDFs
    External(ExternalSuite),
}

/// External test suites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExternalSuite {
    /// veraPDF test corpus
    VeraPDF,
    /// qpdf test suite
    QPdf,
    /// Isartor test suite
    Isartor,
    /// PDF Association samples
    PdfAssociation,
}

/// PDF features that might be tested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PdfFeature {
    Text,
    Graphics,
    Images,
    Forms,
    Annotations,
    Multimedia,
    JavaScript,
    Encryption,
    DigitalSignatures,
    Compression,
    Linearization,
    TaggedPdf,
    Layers,
    ThreeD,
    Portfolios,
}

/// Compliance levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceLevel {
    /// ISO 32000-1:2008 (PDF 1.7)
    Pdf17,
    /// ISO 32000-2:2020 (PDF 2.0)
    Pdf20,
    /// PDF/A variants
    PdfA1b,
    PdfA1a,
    PdfA2b,
    PdfA2u,
    PdfA2a,
    PdfA3b,
    PdfA3u,
    PdfA3a,
    PdfA4,
    /// PDF/X variants
    PdfX1a,
    PdfX3,
    PdfX4,
    /// PDF/E
    PdfE1,
    /// PDF/UA
    PdfUA1,
}

/// Expected behavior when processing a test PDF
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExpectedBehavior {
    /// Should parse successfully
    ParseSuccess {
        /// Expected page count
        page_count: Option<usize>,
        /// Expected document properties
        properties: Option<HashMap<String, String>>,
    },
    /// Should fail to parse with specific error
    ParseError {
        /// Error type expected
        error_type: String,
        /// Error message pattern (regex)
        error_pattern: Option<String>,
    },
    /// Should parse with warnings
    ParseWarning {
        /// Warning patterns expected
        warning_patterns: Vec<String>,
    },
    /// Custom validation function name
    CustomValidation(String),
}

/// Metadata for a test PDF
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestMetadata {
    /// Name of the test
    pub name: String,
    /// Description of what this tests
    pub description: String,
    /// PDF version
    pub pdf_version: String,
    /// Features used in this PDF
    pub features: Vec<PdfFeature>,
    /// Compliance levels this PDF adheres to
    pub compliance: Vec<ComplianceLevel>,
    /// File size in bytes
    pub file_size: Option<u64>,
    /// SHA-256 hash of the file
    pub sha256: Option<String>,
    /// Creation date
    pub created: Option<chrono::DateTime<chrono::Utc>>,
    /// Source of the test file
    pub source: Option<String>,
}

/// A test PDF with its metadata and expected behavior
#[derive(Debug, Clone)]
pub struct TestPdf {
    /// Path to the PDF file
    pub path: PathBuf,
    /// Test metadata
    pub metadata: TestMetadata,
    /// Expected behavior when processing
    pub expected_behavior: ExpectedBehavior,
    /// Category of this test
    pub category: TestCategory,
}

impl TestPdf {
    /// Load the PDF content
    pub fn load(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }
    
    /// Get the filename
    pub fn filename(&self) -> &str {
        self.path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
    }
}

/// Test corpus containing all test PDFs
pub struct TestCorpus {
    /// Root directory of the test suite
    root_dir: PathBuf,
    /// Test PDFs organized by category
    fixtures: HashMap<TestCategory, Vec<TestPdf>>,
    /// External test suites
    external_suites: Vec<ExternalTestSuite>,
}

impl TestCorpus {
    /// Create a new test corpus
    pub fn new<P: AsRef<Path>>(root_dir: P) -> Result<Self> {
        let root_dir = root_dir.as_ref().to_path_buf();
        let mut corpus = Self {
            root_dir: root_dir.clone(),
            fixtures: HashMap::new(),
            external_suites: Vec::new(),
        };
        
        // Load fixtures
        corpus.load_fixtures()?;
        
        Ok(corpus)
    }
    
    /// Load all test fixtures
    fn load_fixtures(&mut self) -> Result<()> {
        let fixtures_dir = self.root_dir.join("fixtures");
        
        // Load valid PDFs
        self.load_category_fixtures(&fixtures_dir.join("valid/minimal"), TestCategory::Minimal)?;
        self.load_category_fixtures(&fixtures_dir.join("valid/standard"), TestCategory::Standard)?;
        self.load_category_fixtures(&fixtures_dir.join("valid/complex"), TestCategory::Complex)?;
        self.load_category_fixtures(&fixtures_dir.join("valid/edge-cases"), TestCategory::EdgeCases)?;
        
        // Load invalid PDFs
        self.load_category_fixtures(&fixtures_dir.join("invalid/corrupted"), TestCategory::Corrupted)?;
        self.load_category_fixtures(&fixtures_dir.join("invalid/malformed"), TestCategory::Malformed)?;
        self.load_category_fixtures(&fixtures_dir.join("invalid/security"), TestCategory::Security)?;
        
        Ok(())
    }
    
    /// Load fixtures from a category directory
    fn load_category_fixtures(&mut self, dir: &Path, category: TestCategory) -> Result<()> {
        if !dir.exists() {
            return Ok(());
        }
        
        let mut pdfs = Vec::new();
        
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            
            if path.extension().and_then(|s| s.to_str()) == Some("pdf") {
                // Look for accompanying metadata file
                let meta_path = path.with_extension("json");
                let (metadata, expected_behavior) = if meta_path.exists() {
                    self.load_metadata(&meta_path)?
                } else {
                    // Generate default metadata
                    self.generate_default_metadata(&path)?
                };
                
                pdfs.push(TestPdf {
                    path,
                    metadata,
                    expected_behavior,
                    category,
                });
            }
        }
        
        self.fixtures.insert(category, pdfs);
        Ok(())
    }
    
    /// Load metadata from JSON file
    fn load_metadata(&self, path: &Path) -> Result<(TestMetadata, ExpectedBehavior)> {
        let content = fs::read_to_string(path)?;
        let data: serde_json::Value = serde_json::from_str(&content)?;
        
        let metadata = serde_json::from_value(data["metadata"].clone())?;
        let expected_behavior = serde_json::from_value(data["expected_behavior"].clone())?;
        
        Ok((metadata, expected_behavior))
    }
    
    /// Generate default metadata for a PDF without metadata file
    fn generate_default_metadata(&self, path: &Path) -> Result<(TestMetadata, ExpectedBehavior)> {
        let file_name = path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        
        let metadata = TestMetadata {
            name: file_name.to_string(),
            description: format!("Test PDF: {}", file_name),
            pdf_version: "1.4".to_string(),
            features: Vec::new(),
            compliance: Vec::new(),
            file_size: fs::metadata(path).ok().map(|m| m.len()),
            sha256: None,
            created: None,
            source: None,
        };
        
        let expected_behavior = ExpectedBehavior::ParseSuccess {
            page_count: None,
            properties: None,
        };
        
        Ok((metadata, expected_behavior))
    }
    
    /// Get all PDFs in a category
    pub fn get_category(&self, category: TestCategory) -> Option<&[TestPdf]> {
        self.fixtures.get(&category).map(|v| v.as_slice())
    }
    
    /// Get all test PDFs
    pub fn all_pdfs(&self) -> impl Iterator<Item = &TestPdf> {
        self.fixtures.values().flat_map(|v| v.iter())
    }
    
    /// Get PDFs with specific features
    pub fn pdfs_with_feature(&self, feature: PdfFeature) -> Vec<&TestPdf> {
        self.all_pdfs()
            .filter(|pdf| pdf.metadata.features.contains(&feature))
            .collect()
    }
    
    /// Get PDFs for specific compliance level
    pub fn pdfs_for_compliance(&self, compliance: ComplianceLevel) -> Vec<&TestPdf> {
        self.all_pdfs()
            .filter(|pdf| pdf.metadata.compliance.contains(&compliance))
            .collect()
    }
}

/// External test suite integration
pub struct ExternalTestSuite {
    /// Name of the suite
    pub name: String,
    /// Suite type
    pub suite_type: ExternalSuite,
    /// Root directory
    pub root_dir: PathBuf,
    /// Test PDFs from this suite
    pub pdfs: Vec<TestPdf>,
}

impl ExternalTestSuite {
    /// Load an external test suite
    pub fn load<P: AsRef<Path>>(suite_type: ExternalSuite, root_dir: P) -> Result<Self> {
        let root_dir = root_dir.as_ref().to_path_buf();
        let name = format!("{:?}", suite_type);
        
        let mut suite = Self {
            name,
            suite_type,
            root_dir,
            pdfs: Vec::new(),
        };
        
        // Load PDFs based on suite type
        match suite_type {
            ExternalSuite::VeraPDF => suite.load_vera_pdf()?,
            ExternalSuite::QPdf => suite.load_qpdf()?,
            ExternalSuite::Isartor => suite.load_isartor()?,
            ExternalSuite::PdfAssociation => suite.load_pdf_association()?,
        }
        
        Ok(suite)
    }
    
    /// Load veraPDF corpus
    fn load_vera_pdf(&mut self) -> Result<()> {
        // TODO: Implement veraPDF corpus loading
        // This would parse the veraPDF corpus structure
        Ok(())
    }
    
    /// Load qpdf test suite
    fn load_qpdf(&mut self) -> Result<()> {
        // TODO: Implement qpdf test suite loading
        Ok(())
    }
    
    /// Load Isartor test suite
    fn load_isartor(&mut self) -> Result<()> {
        // TODO: Implement Isartor test suite loading
        Ok(())
    }
    
    /// Load PDF Association samples
    fn load_pdf_association(&mut self) -> Result<()> {
        // TODO: Implement PDF Association samples loading
        Ok(())
    }
}
