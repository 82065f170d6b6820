use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::error::EmojifyError;
use crate::face_detector::{DetectedFace, FaceDetector};

/// Expression score reported for every face.
///
/// SeetaFace localizes faces but does not classify expressions, so each
/// face is reported smiling with both eyes open.
const DEFAULT_SCORE: f32 = 1.0;

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is loaded once on construction; each `detect` call builds a
/// fresh detector from it, since detection mutates engine state.
pub struct RustfaceDetector {
    model: rustface::Model,
}

impl RustfaceDetector {
    /// Load a SeetaFace model (e.g. `seeta_fd_frontal_v1.0.bin`) from disk.
    ///
    /// A missing or unreadable model is the unavailable-detector condition:
    /// leave the detector unset and [`crate::Emojifier::emojify`] will pass
    /// the image through unmodified.
    pub fn from_model_path<P: AsRef<Path>>(path: P) -> Result<Self, EmojifyError> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| EmojifyError::ModelLoad(format!("{}: {e}", path.display())))?;
        let model = rustface::read_model(std::io::Cursor::new(data))
            .map_err(|e| EmojifyError::ModelLoad(e.to_string()))?;
        Ok(Self { model })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, image: &DynamicImage) -> Vec<DetectedFace> {
        let gray = image::imageops::grayscale(image);
        let (width, height) = (gray.width(), gray.height());

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(20);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray.as_raw(), width, height));
        debug!(faces = faces.len(), "rustface detection complete");

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                DetectedFace {
                    x: bbox.x() as f32,
                    y: bbox.y() as f32,
                    width: bbox.width() as f32,
                    height: bbox.height() as f32,
                    smile_probability: DEFAULT_SCORE,
                    left_eye_open_probability: DEFAULT_SCORE,
                    right_eye_open_probability: DEFAULT_SCORE,
                }
            })
            .collect()
    }
}
