//! Error types for dashboard export paging

use thiserror::Error;

/// Result type alias using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur when paginating or exporting a dashboard
#[derive(Debug, Error)]
pub enum ExportError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Paper format string could not be parsed
    #[error("Unknown page format: {0:?}")]
    UnknownFormat(String),

    /// Orientation string could not be parsed
    #[error("Unknown page orientation: {0:?}")]
    UnknownOrientation(String),

    /// No row capacity is defined for this format/orientation pair
    #[error("Unsupported export page: format {format:?}, orientation {orientation:?}")]
    UnsupportedPage { format: String, orientation: String },

    /// Page row capacity must be positive
    #[error("Invalid page capacity: {0} rows")]
    InvalidCapacity(u32),

    /// Card geometry is malformed
    #[error("Invalid card {card}: {reason}")]
    InvalidCard { card: String, reason: String },

    /// Card is taller than a whole page and can never be placed
    #[error("Card {card} is {size_y} rows tall but a page holds only {page_max_rows} rows")]
    CardTooTall {
        card: String,
        size_y: u32,
        page_max_rows: u32,
    },

    /// Page layout could not be computed
    #[error("Layout calculation failed: {0}")]
    LayoutError(String),

    /// Page not found
    #[error("Page with ID {0:?} not found")]
    PageNotFound(lopdf::ObjectId),
}
