//! Overlay emoji onto detected faces in a photo.
//!
//! Faces come from a pluggable [`FaceDetector`] backend; each face's smile
//! and eye-open scores select one of eight emoji, which is scaled to the
//! face's bounding rectangle and alpha-composited onto an owned copy of the
//! source image.
//!
//! # Example
//!
//! ```no_run
//! use emojify::{EmojiAssetSet, Emojifier};
//!
//! let assets = EmojiAssetSet::load_from_dir("assets/emoji").unwrap();
//! let photo = image::open("photo.jpg").unwrap();
//!
//! let result = Emojifier::new(assets)
//!     .emojify(&photo)
//!     .unwrap();
//! result.save("emojified.png").unwrap();
//! ```
#![warn(missing_docs)]

mod assets;
mod classifier;
mod compositor;
mod error;
/// Face detection traits and data types.
pub mod face_detector;
#[cfg(feature = "rustface")]
/// Built-in SeetaFace-based face detector backend.
pub mod rustface_backend;

/// Emoji image table indexed by category.
pub use assets::EmojiAssetSet;
/// Emoji category and the score classifier.
pub use classifier::{classify, EmojiCategory};
/// Error type returned by emojify operations.
pub use error::EmojifyError;
/// Face record and detector trait.
pub use face_detector::{DetectedFace, FaceDetector};
#[cfg(feature = "rustface")]
/// Built-in detector that loads a SeetaFace model file.
pub use rustface_backend::RustfaceDetector;

/// Resampling filter used when scaling emoji (re-exported from `image`).
pub use image::imageops::FilterType;

use image::{DynamicImage, RgbaImage};
use tracing::{debug, warn};

/// Draws emoji over detected faces.
///
/// Configure with the builder-style setters, then call
/// [`Emojifier::emojify`] to detect and draw in one step, or
/// [`Emojifier::composite`] with faces obtained elsewhere.
pub struct Emojifier {
    assets: EmojiAssetSet,
    filter: FilterType,
    detector: Option<Box<dyn FaceDetector>>,
}

impl Emojifier {
    /// Create an emojifier drawing from the given asset set.
    pub fn new(assets: EmojiAssetSet) -> Self {
        Self {
            assets,
            filter: FilterType::Triangle,
            detector: None,
        }
    }

    /// Set the resampling filter used to scale emoji into face rectangles
    /// (default: bilinear, `FilterType::Triangle`).
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Provide the face detection backend used by [`Emojifier::emojify`].
    pub fn face_detector(mut self, detector: Box<dyn FaceDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Draw the matching emoji over each supplied face on an owned copy of
    /// `source` and return it.
    ///
    /// The caller's image is never modified. Faces draw in supplied order,
    /// so later faces win overlapping pixels. An empty face list returns a
    /// copy pixel-identical to the source. A source with zero width or
    /// height is rejected with [`EmojifyError::ZeroDimensions`].
    pub fn composite(
        &self,
        source: &DynamicImage,
        faces: &[DetectedFace],
    ) -> Result<RgbaImage, EmojifyError> {
        compositor::composite_faces(source, faces, &self.assets, self.filter)
    }

    /// Detect faces with the configured backend and composite their emoji.
    ///
    /// Degrades gracefully when detection cannot run: with no backend
    /// configured, or a backend reporting itself non-operational, the
    /// result is an unmodified copy of the source and a warning is logged.
    pub fn emojify(&self, source: &DynamicImage) -> Result<RgbaImage, EmojifyError> {
        let detector = match &self.detector {
            Some(detector) => detector,
            None => {
                warn!("no face detector configured, returning image unmodified");
                return self.composite(source, &[]);
            }
        };

        if !detector.is_operational() {
            warn!("face detector is not operational, returning image unmodified");
            return self.composite(source, &[]);
        }

        let faces = detector.detect(source);
        debug!(faces = faces.len(), "face detection complete");
        self.composite(source, &faces)
    }
}
