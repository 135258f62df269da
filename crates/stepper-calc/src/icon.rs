//! Error dialog icon
//!
//! The PNG is scaled to a block of terminal cells, two pixels per cell
//! (upper and lower half). The default icon is compiled into the binary; a
//! missing or broken override file means no icon.

use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;
use thiserror::Error;
use tracing::{debug, warn};

/// PNG bundled into the binary
pub const BUNDLED_ICON: &[u8] = include_bytes!("../assets/error.png");

/// Alpha below which a pixel is treated as transparent
const ALPHA_CUTOFF: u8 = 128;

/// Why an icon could not be prepared
#[derive(Debug, Error)]
pub enum IconError {
    /// The file could not be opened or decoded
    #[error("cannot load icon: {0}")]
    Image(#[from] image::ImageError),

    /// A zero cell size was requested
    #[error("icon size must be non-zero, got {columns}x{rows}")]
    EmptySize {
        /// Requested columns
        columns: u16,
        /// Requested rows
        rows: u16,
    },
}

/// An icon scaled to terminal cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorIcon {
    columns: u16,
    rows: u16,
    /// Row-major, `columns` wide and `rows * 2` tall; `None` is transparent
    pixels: Vec<Option<[u8; 3]>>,
}

impl ErrorIcon {
    /// Loads the icon, or returns `None` after logging why it is unavailable
    #[must_use]
    pub fn load(path: &Path, columns: u16, rows: u16) -> Option<Self> {
        match Self::try_load(path, columns, rows) {
            Ok(icon) => {
                debug!(path = %path.display(), columns, rows, "error icon loaded");
                Some(icon)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "error icon unavailable, dialog shown without it");
                None
            }
        }
    }

    /// Decodes the bundled icon, or returns `None` after logging why it failed
    #[must_use]
    pub fn bundled(columns: u16, rows: u16) -> Option<Self> {
        match Self::from_png_bytes(BUNDLED_ICON, columns, rows) {
            Ok(icon) => Some(icon),
            Err(e) => {
                warn!(error = %e, "bundled error icon unavailable, dialog shown without it");
                None
            }
        }
    }

    /// Loads and scales the icon
    pub fn try_load(path: &Path, columns: u16, rows: u16) -> Result<Self, IconError> {
        check_size(columns, rows)?;
        Ok(Self::scale(&image::open(path)?, columns, rows))
    }

    /// Decodes and scales an in-memory image
    pub fn from_png_bytes(bytes: &[u8], columns: u16, rows: u16) -> Result<Self, IconError> {
        check_size(columns, rows)?;
        Ok(Self::scale(&image::load_from_memory(bytes)?, columns, rows))
    }

    fn scale(source: &DynamicImage, columns: u16, rows: u16) -> Self {
        let rgba = source.to_rgba8();
        let scaled = image::imageops::resize(
            &rgba,
            u32::from(columns),
            u32::from(rows) * 2,
            FilterType::Triangle,
        );

        let pixels = scaled
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                (a >= ALPHA_CUTOFF).then_some([r, g, b])
            })
            .collect();

        Self {
            columns,
            rows,
            pixels,
        }
    }

    /// Builds an icon from pixels already at cell resolution
    ///
    /// Returns `None` unless `pixels` holds exactly `columns * rows * 2` entries.
    #[must_use]
    pub fn from_pixels(columns: u16, rows: u16, pixels: Vec<Option<[u8; 3]>>) -> Option<Self> {
        let expected = usize::from(columns) * usize::from(rows) * 2;
        (pixels.len() == expected && expected > 0).then_some(Self {
            columns,
            rows,
            pixels,
        })
    }

    /// Width in cells
    #[must_use]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Height in cells
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Upper and lower pixel colors of a cell
    #[must_use]
    pub fn cell(&self, column: u16, row: u16) -> (Option<[u8; 3]>, Option<[u8; 3]>) {
        (self.pixel(column, row * 2), self.pixel(column, row * 2 + 1))
    }

    fn pixel(&self, x: u16, y: u16) -> Option<[u8; 3]> {
        if x >= self.columns || y >= self.rows * 2 {
            return None;
        }
        let index = usize::from(y) * usize::from(self.columns) + usize::from(x);
        self.pixels.get(index).copied().flatten()
    }
}

fn check_size(columns: u16, rows: u16) -> Result<(), IconError> {
    if columns == 0 || rows == 0 {
        return Err(IconError::EmptySize { columns, rows });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RED: [u8; 3] = [200, 0, 0];
    const WHITE: [u8; 3] = [255, 255, 255];

    #[test]
    fn test_load_bundled_icon() {
        let icon = ErrorIcon::bundled(6, 3).unwrap();
        assert_eq!(icon.columns(), 6);
        assert_eq!(icon.rows(), 3);
        // Centre of the badge is opaque
        let (top, bottom) = icon.cell(3, 1);
        assert!(top.is_some() || bottom.is_some());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let icon = ErrorIcon::load(Path::new("/nonexistent/error.png"), 6, 3);
        assert!(icon.is_none());
    }

    #[test]
    fn test_garbage_file_falls_back() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"definitely not a png").unwrap();
        assert!(ErrorIcon::load(file.path(), 6, 3).is_none());
        assert!(matches!(
            ErrorIcon::try_load(file.path(), 6, 3),
            Err(IconError::Image(_))
        ));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = ErrorIcon::from_png_bytes(BUNDLED_ICON, 0, 3).unwrap_err();
        assert!(matches!(err, IconError::EmptySize { columns: 0, rows: 3 }));
    }

    #[test]
    fn test_bundled_icon_needs_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error.png");
        std::fs::write(&path, BUNDLED_ICON).unwrap();
        let from_file = ErrorIcon::try_load(&path, 6, 3).unwrap();
        drop(dir);
        assert_eq!(ErrorIcon::bundled(6, 3), Some(from_file));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(matches!(
            ErrorIcon::from_png_bytes(b"not a png", 6, 3),
            Err(IconError::Image(_))
        ));
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(ErrorIcon::from_pixels(2, 1, vec![None; 3]).is_none());
        assert!(ErrorIcon::from_pixels(0, 0, Vec::new()).is_none());
        assert!(ErrorIcon::from_pixels(2, 1, vec![None; 4]).is_some());
    }

    #[test]
    fn test_cell_reads_upper_and_lower_pixel() {
        let icon =
            ErrorIcon::from_pixels(2, 1, vec![Some(RED), None, Some(WHITE), Some(RED)]).unwrap();
        assert_eq!(icon.cell(0, 0), (Some(RED), Some(WHITE)));
        assert_eq!(icon.cell(1, 0), (None, Some(RED)));
    }

    #[test]
    fn test_cell_out_of_range_is_transparent() {
        let icon = ErrorIcon::from_pixels(1, 1, vec![Some(RED), Some(RED)]).unwrap();
        assert_eq!(icon.cell(5, 5), (None, None));
    }
}
