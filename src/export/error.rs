use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("sheet generation failed: {0}")]
    Sheet(String),
}

impl From<printpdf::Error> for ExportError {
    fn from(e: printpdf::Error) -> Self {
        ExportError::Pdf(e.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Sheet(e.to_string())
    }
}
