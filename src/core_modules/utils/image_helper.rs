// THEORY:
// An RGBA frame buffer is already interleaved 4-channel data: R, G, B, A repeating at
// stride 4. These helpers move frames in and out of the shapes the rest of the crate
// works on, so per-channel statistics and point geometry can run on real images.

pub mod image_helper {
    use crate::core_modules::error::MathResult;
    use crate::core_modules::point::point::Point;
    use crate::core_modules::reduction::reduction::check_channels;
    use image::error::{ImageError, LimitError, LimitErrorKind};
    use image::{ImageEncoder, Limits, RgbaImage};
    use std::path::Path;

    /// Widens a raw RGBA8 buffer into interleaved `f64` channels.
    pub fn frame_to_channels(frame_buffer: &[u8]) -> MathResult<Vec<f64>> {
        let channels: Vec<f64> = frame_buffer.iter().map(|&b| f64::from(b)).collect();
        check_channels(&channels)?;
        Ok(channels)
    }

    pub fn image_to_channels(img: &RgbaImage) -> Vec<f64> {
        img.as_raw().iter().map(|&b| f64::from(b)).collect()
    }

    /// Decodes any format `image` understands and returns `(width, height, channels)`.
    pub fn load_channels(
        path: impl AsRef<Path>,
    ) -> Result<(u32, u32, Vec<f64>), ImageError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok((width, height, image_to_channels(&img)))
    }

    /// Coordinates of every pixel with non-zero alpha, in row-major order.
    pub fn opaque_points(img: &RgbaImage) -> Vec<Point> {
        img.enumerate_pixels()
            .filter(|(_, _, px)| px[3] > 0)
            .map(|(x, y, _)| Point::new(x as i32, y as i32))
            .collect()
    }

    fn dimension_error() -> ImageError {
        ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError))
    }

    /// Writes a transparent PNG with each in-bounds point drawn as an opaque white pixel.
    /// Canvases larger than the default `image::Limits` allocation budget are refused.
    pub fn save_points(
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        pts: &[Point],
    ) -> Result<(), ImageError> {
        let len = u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(dimension_error)?;
        Limits::default().reserve(len)?;
        let len = usize::try_from(len).map_err(|_| dimension_error())?;
        let row = width as usize;

        let mut buffer = vec![0u8; len];
        for pt in pts {
            let (Ok(x), Ok(y)) = (u32::try_from(pt.x), u32::try_from(pt.y)) else {
                continue;
            };
            if x >= width || y >= height {
                continue;
            }
            let start = (y as usize * row + x as usize) * 4;
            buffer[start..start + 4].copy_from_slice(&[255, 255, 255, 255]);
        }

        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(output);
        encoder.write_image(&buffer, width, height, image::ExtendedColorType::Rgba8)?;

        Ok(())
    }
}
