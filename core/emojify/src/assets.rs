use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::classifier::EmojiCategory;
use crate::error::EmojifyError;

/// Extensions probed when loading assets from a directory, in priority order.
const ASSET_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// A fixed mapping from [`EmojiCategory`] to an emoji image.
///
/// The set is exhaustive by construction: all eight images must be supplied
/// up front, so category lookups never fail at composite time.
pub struct EmojiAssetSet {
    // One slot per classification code.
    images: [RgbaImage; 8],
}

impl EmojiAssetSet {
    /// Build a set by invoking `load` exactly once per category.
    ///
    /// Zero-dimension images are rejected: an emoji that cannot be drawn is
    /// an asset problem, caught here rather than during compositing.
    pub fn from_loader<F>(mut load: F) -> Result<Self, EmojifyError>
    where
        F: FnMut(EmojiCategory) -> Result<RgbaImage, EmojifyError>,
    {
        let mut load_checked = |category: EmojiCategory| -> Result<RgbaImage, EmojifyError> {
            let image = load(category)?;
            if image.width() == 0 || image.height() == 0 {
                return Err(EmojifyError::AssetLoad {
                    name: category.asset_name(),
                    reason: "asset has zero dimensions".to_string(),
                });
            }
            Ok(image)
        };

        let images = [
            load_checked(EmojiCategory::ClosedEyeFrown)?,
            load_checked(EmojiCategory::LeftWinkFrown)?,
            load_checked(EmojiCategory::RightWinkFrown)?,
            load_checked(EmojiCategory::Frown)?,
            load_checked(EmojiCategory::ClosedEyeSmile)?,
            load_checked(EmojiCategory::LeftWink)?,
            load_checked(EmojiCategory::RightWink)?,
            load_checked(EmojiCategory::Smile)?,
        ];

        Ok(Self { images })
    }

    /// Load `smile.png`, `rightwink.png`, … from a directory.
    ///
    /// For each category the extensions `png`, `jpg`, `jpeg` are probed in
    /// order and the first match is decoded. A category with no matching
    /// file is an error.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, EmojifyError> {
        let dir = dir.as_ref();
        Self::from_loader(|category| {
            let name = category.asset_name();
            for ext in ASSET_EXTENSIONS {
                let path = dir.join(format!("{name}.{ext}"));
                if path.exists() {
                    let image = image::open(&path).map_err(|e| EmojifyError::AssetLoad {
                        name,
                        reason: format!("{}: {e}", path.display()),
                    })?;
                    debug!(asset = name, path = %path.display(), "loaded emoji asset");
                    return Ok(image.to_rgba8());
                }
            }
            Err(EmojifyError::AssetLoad {
                name,
                reason: format!("no {name}.{{png,jpg,jpeg}} in {}", dir.display()),
            })
        })
    }

    /// The emoji image for a category. Total: every category has an image.
    pub fn get(&self, category: EmojiCategory) -> &RgbaImage {
        &self.images[category.code() as usize]
    }
}
