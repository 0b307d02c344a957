use image::{
    imageops::{resize, FilterType},
    GrayImage, ImageBuffer, Luma,
};

/// Single-channel floating-point image; every loaded frame is delivered in
/// this representation.
pub type GrayTensor = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Pluggable per-image transform, applied identically to both sides of a
/// stereo pair. Must be pure: the same input image yields the same tensor.
pub type Transform = Box<dyn Fn(&GrayImage) -> GrayTensor>;

/// Output edge length of [`standard_transform`].
pub const TENSOR_SIZE: u32 = 224;

const NORM_MEAN: f32 = 0.5;
const NORM_STD: f32 = 0.5;

/// Convert an 8-bit grayscale image to a [0, 1] tensor at its native size.
pub fn to_unit_tensor(img: &GrayImage) -> GrayTensor {
    let data: Vec<f32> = img.as_raw().iter().map(|&v| v as f32 / 255.0).collect();
    GrayTensor::from_raw(img.width(), img.height(), data)
        .expect("raw grayscale buffer matches image dimensions")
}

/// The fixed dataset transform: bilinear resize to 224x224, scale to [0, 1],
/// then normalize with mean 0.5 / std 0.5. Output values lie in [-1, 1].
pub fn standard_transform() -> Transform {
    Box::new(|img: &GrayImage| {
        let resized = resize(img, TENSOR_SIZE, TENSOR_SIZE, FilterType::Triangle);
        let data: Vec<f32> = resized
            .as_raw()
            .iter()
            .map(|&v| (v as f32 / 255.0 - NORM_MEAN) / NORM_STD)
            .collect();
        GrayTensor::from_raw(TENSOR_SIZE, TENSOR_SIZE, data)
            .expect("resized buffer matches tensor dimensions")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_image(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([value]))
    }

    #[test]
    fn unit_tensor_keeps_size_and_scales_to_unit_range() {
        let tensor = to_unit_tensor(&flat_image(6, 4, 255));
        assert_eq!(tensor.dimensions(), (6, 4));
        assert!(tensor.as_raw().iter().all(|&v| (v - 1.0).abs() < 1e-6));

        let dark = to_unit_tensor(&flat_image(6, 4, 0));
        assert!(dark.as_raw().iter().all(|&v| v.abs() < 1e-6));
    }

    #[test]
    fn standard_transform_resizes_and_centers() {
        let transform = standard_transform();

        let white = transform(&flat_image(8, 8, 255));
        assert_eq!(white.dimensions(), (TENSOR_SIZE, TENSOR_SIZE));
        assert!(white.as_raw().iter().all(|&v| (v - 1.0).abs() < 1e-5));

        let black = transform(&flat_image(8, 8, 0));
        assert!(black.as_raw().iter().all(|&v| (v + 1.0).abs() < 1e-5));
    }

    #[test]
    fn standard_transform_is_deterministic() {
        let transform = standard_transform();
        let mut img = GrayImage::new(10, 10);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Luma([(x * 20 + y) as u8]);
        }

        let a = transform(&img);
        let b = transform(&img);
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
