use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::assets::EmojiAssetSet;
use crate::classifier;
use crate::error::EmojifyError;
use crate::face_detector::DetectedFace;

/// Draw an emoji over every detected face on an owned copy of `source`.
///
/// Faces draw in the supplied order, so a later face wins any overlapping
/// pixels. The caller's image is never touched.
pub(crate) fn composite_faces(
    source: &DynamicImage,
    faces: &[DetectedFace],
    assets: &EmojiAssetSet,
    filter: FilterType,
) -> Result<RgbaImage, EmojifyError> {
    if source.width() == 0 || source.height() == 0 {
        return Err(EmojifyError::ZeroDimensions);
    }

    let mut canvas = source.to_rgba8();
    for face in faces {
        draw_face(&mut canvas, face, assets, filter);
    }

    debug!(faces = faces.len(), "composited emoji overlays");
    Ok(canvas)
}

/// Scale the face's emoji to its bounding rectangle and alpha-composite it.
///
/// Corner coordinates truncate toward zero, so fractional face positions
/// land on whole pixels. Rectangles that collapse to zero extent draw
/// nothing; overlays reaching past the image edge are clipped.
fn draw_face(
    canvas: &mut RgbaImage,
    face: &DetectedFace,
    assets: &EmojiAssetSet,
    filter: FilterType,
) {
    let left = face.x as i64;
    let top = face.y as i64;
    let width = face.right() as i64 - left;
    let height = face.bottom() as i64 - top;
    if width <= 0 || height <= 0 {
        return;
    }

    let category = classifier::classify(
        face.smile_probability,
        face.left_eye_open_probability,
        face.right_eye_open_probability,
    );
    let scaled = imageops::resize(assets.get(category), width as u32, height as u32, filter);
    imageops::overlay(canvas, &scaled, left, top);
}
