use image::DynamicImage;

/// A face located by a detection backend, with the classification scores
/// used to pick its emoji.
#[derive(Debug, Clone)]
pub struct DetectedFace {
    /// X coordinate of the top-left corner (pixels).
    pub x: f32,
    /// Y coordinate of the top-left corner (pixels).
    pub y: f32,
    /// Width of the bounding box (pixels). Authoritative for overlay sizing.
    pub width: f32,
    /// Height of the bounding box (pixels). Authoritative for overlay sizing.
    pub height: f32,
    /// Probability in [0.0, 1.0] that the face is smiling. Backends that
    /// cannot compute the score report a negative sentinel.
    pub smile_probability: f32,
    /// Probability in [0.0, 1.0] that the subject's left eye is open.
    pub left_eye_open_probability: f32,
    /// Probability in [0.0, 1.0] that the subject's right eye is open.
    pub right_eye_open_probability: f32,
}

impl DetectedFace {
    /// X coordinate of the right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Pluggable face detection backend.
///
/// Implement this trait to supply faces from any engine (a local model, a
/// vendor SDK, a remote service) and pass it to
/// [`crate::Emojifier::face_detector`]. Backends holding native resources
/// release them in `Drop`; the detector is dropped with the `Emojifier` or
/// the caller's scope, on every exit path.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in the image. Order is backend-defined and preserved
    /// through compositing.
    fn detect(&self, image: &DynamicImage) -> Vec<DetectedFace>;

    /// Whether the backend can currently run (model data present, native
    /// runtime ready). A non-operational detector is skipped and the source
    /// image passes through unmodified.
    fn is_operational(&self) -> bool {
        true
    }
}
