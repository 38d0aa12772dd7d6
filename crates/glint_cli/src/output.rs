use anyhow::{Context, Result};
use glint_renderer::ImageBuffer;
use std::path::Path;

/// Quantize `image` to 8-bit RGB and write it to `path`.
///
/// The file format is chosen from the extension (BMP, PNG, ...).
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let bytes = image.to_rgb8();

    image::save_buffer(path, &bytes, image.width, image.height, image::ColorType::Rgb8)
        .with_context(|| format!("failed to write image {}", path.display()))?;

    log::info!("Image saved as {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_renderer::Color;

    #[test]
    fn test_save_and_reload_bmp() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(2, 1, Color::new(0.0, 0.5, 2.0));

        let path = std::env::temp_dir().join(format!("glint_output_test_{}.bmp", std::process::id()));
        save_image(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(loaded.get_pixel(2, 1).0, [0, 127, 255]);
        assert_eq!(loaded.get_pixel(1, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_unwritable_path_fails() {
        let image = ImageBuffer::new(1, 1);
        let path = Path::new("does/not/exist/out.bmp");

        assert!(save_image(&image, path).is_err());
    }
}
