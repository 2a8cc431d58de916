//! PNG input and output.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Result, ThemeError};

/// Load any image file as 8-bit RGBA.
pub fn load_png(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| ThemeError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to load image: {}", e),
    })?;

    Ok(img.to_rgba8())
}

/// Write an RGBA image as PNG, replacing any existing file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ThemeError::Image {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("button.png");
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8 * 80, y as u8 * 80, 5, 128]));

        write_png(&img, &path).unwrap();
        let back = load_png(&path).unwrap();

        assert_eq!(back, img);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");

        write_png(&RgbaImage::new(4, 4), &path).unwrap();
        write_png(&RgbaImage::new(2, 2), &path).unwrap();

        assert_eq!(load_png(&path).unwrap().dimensions(), (2, 2));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_png(Path::new("/nonexistent/icon.png")).unwrap_err();
        assert!(matches!(err, ThemeError::Image { .. }));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not a png").unwrap();

        assert!(load_png(&path).is_err());
    }
}
