//! Paper formats, orientations and the page row-capacity table

use crate::Result;
use crate::constants::*;
use crate::error::ExportError;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Paper format of an export page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageFormat {
    #[default]
    A4,
    A3,
}

impl FromStr for PageFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(Self::A4),
            "a3" => Ok(Self::A3),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A4 => f.write_str("a4"),
            Self::A3 => f.write_str("a3"),
        }
    }
}

/// Orientation of an export page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = ExportError;

    /// Accepts the short forms `p`/`l` as well as the full words
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "portrait" => Ok(Self::Portrait),
            "l" | "landscape" => Ok(Self::Landscape),
            _ => Err(ExportError::UnknownOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portrait => f.write_str("portrait"),
            Self::Landscape => f.write_str("landscape"),
        }
    }
}

/// Number of grid rows a single page of this format and orientation can hold
pub fn page_max_rows(format: PageFormat, orientation: Orientation) -> u32 {
    match (format, orientation) {
        (PageFormat::A4, Orientation::Portrait) => A4_PORTRAIT_MAX_ROWS,
        (PageFormat::A4, Orientation::Landscape) => A4_LANDSCAPE_MAX_ROWS,
        (PageFormat::A3, Orientation::Portrait) => A3_PORTRAIT_MAX_ROWS,
        (PageFormat::A3, Orientation::Landscape) => A3_LANDSCAPE_MAX_ROWS,
    }
}

/// Look up the row capacity for a format/orientation given as strings.
///
/// Returns `None` when either half of the pair is not recognized.
pub fn lookup_page_max_rows(format: &str, orientation: &str) -> Option<u32> {
    let format = format.parse::<PageFormat>().ok()?;
    let orientation = orientation.parse::<Orientation>().ok()?;
    Some(page_max_rows(format, orientation))
}

/// Like [`lookup_page_max_rows`], but an unknown pair is a configuration error
pub fn capacity_for(format: &str, orientation: &str) -> Result<u32> {
    let rows = lookup_page_max_rows(format, orientation).ok_or_else(|| {
        ExportError::UnsupportedPage {
            format: format.to_string(),
            orientation: orientation.to_string(),
        }
    })?;
    trace!("Page {}/{} holds {} rows", format, orientation, rows);
    Ok(rows)
}

/// Page size in points as `(width, height)`
pub fn page_size(format: PageFormat, orientation: Orientation) -> (f32, f32) {
    let (short, long) = match format {
        PageFormat::A4 => (A4_WIDTH, A4_HEIGHT),
        PageFormat::A3 => (A3_WIDTH, A3_HEIGHT),
    };
    match orientation {
        Orientation::Portrait => (short, long),
        Orientation::Landscape => (long, short),
    }
}
