//! Accepted file kinds and their MIME allow-list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File kinds accepted for upload.
///
/// Anything outside this allow-list is rejected at validation time; the
/// core never inspects file bytes, only the declared type and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF document.
    Pdf,
    /// Word document (OOXML).
    Docx,
    /// Excel spreadsheet (OOXML).
    Xlsx,
    /// PowerPoint presentation (OOXML).
    Pptx,
}

impl FileType {
    /// The MIME type associated with this file kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }

    /// Resolve a file kind from a MIME type, if it is on the allow-list.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(Self::Xlsx)
            }
            "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                Some(Self::Pptx)
            }
            _ => None,
        }
    }

    /// Return the file kind as its lowercase extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Pptx => "pptx",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileType {
    type Err = docuflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "xlsx" => Ok(Self::Xlsx),
            "pptx" => Ok(Self::Pptx),
            _ => Err(docuflow_core::AppError::validation(format!(
                "Invalid file type: '{s}'. Expected one of: pdf, docx, xlsx, pptx"
            ))),
        }
    }
}
