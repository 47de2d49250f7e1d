use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

#[cfg(test)]
impl Normalization {
    pub const UNIT: Normalization = Normalization {
        mean: [0.0; 3],
        std: [1.0; 3],
    };
}

/// Largest centered region of the image with the target aspect ratio.
pub fn center_crop(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (src_w, src_h) = (image.width() as u64, image.height() as u64);
    let (dst_w, dst_h) = (width.max(1) as u64, height.max(1) as u64);

    let (crop_w, crop_h) = if src_w * dst_h > src_h * dst_w {
        (src_h * dst_w / dst_h, src_h)
    } else {
        (src_w, src_w * dst_h / dst_w)
    };
    let (crop_w, crop_h) = (crop_w.max(1), crop_h.max(1));

    let x = (src_w - crop_w.min(src_w)) / 2;
    let y = (src_h - crop_h.min(src_h)) / 2;

    image.crop_imm(x as u32, y as u32, crop_w as u32, crop_h as u32)
}

fn image_to_tensor(
    image: &DynamicImage,
    normalization: Normalization,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let tensor = tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        (pixel[c] as f32 / 255.0 - normalization.mean[c]) / normalization.std[c]
    });

    Ok(tensor.into_tensor())
}

/// RGB, center-cropped, resized and normalized into a `[1, 3, height, width]` tensor.
pub fn preprocess_image(
    image: &DynamicImage,
    width: u32,
    height: u32,
    normalization: Normalization,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    if image.width() == 0 || image.height() == 0 {
        return Err("Image has no pixels".into());
    }

    let cropped = center_crop(image, width, height);
    let resized = cropped.resize_exact(width, height, imageops::FilterType::Triangle);

    image_to_tensor(&resized, normalization)
}
