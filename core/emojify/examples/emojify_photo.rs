//! Overlay emoji onto every face in a photo.
//!
//! Usage:
//!   cargo run --example emojify_photo --features rustface -- \
//!       <photo> <seeta_model.bin> [assets_dir] [output]
//!
//! Emoji assets come from `assets_dir` (default `assets/emoji`; run the
//! `generate_assets` example first to create placeholders). Without the
//! `rustface` feature no detector is available and the photo passes
//! through unmodified.

use emojify::{EmojiAssetSet, Emojifier};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let usage = "usage: emojify_photo <photo> <seeta_model.bin> [assets_dir] [output]";
    let mut args = std::env::args().skip(1);
    let photo_path = args.next().expect(usage);
    let model_path = args.next().expect(usage);
    let assets_dir = args.next().unwrap_or_else(|| "assets/emoji".to_string());
    let output = args.next().unwrap_or_else(|| "emojified.png".to_string());

    let photo = image::open(&photo_path)
        .unwrap_or_else(|e| panic!("failed to open {photo_path}: {e}"));
    let assets = EmojiAssetSet::load_from_dir(&assets_dir)
        .unwrap_or_else(|e| panic!("failed to load emoji assets: {e}"));

    let emojifier = Emojifier::new(assets);

    #[cfg(feature = "rustface")]
    let emojifier = {
        let detector = emojify::RustfaceDetector::from_model_path(&model_path)
            .unwrap_or_else(|e| panic!("failed to load SeetaFace model: {e}"));
        emojifier.face_detector(Box::new(detector))
    };
    #[cfg(not(feature = "rustface"))]
    let _ = &model_path;

    let result = emojifier
        .emojify(&photo)
        .unwrap_or_else(|e| panic!("compositing failed: {e}"));
    result
        .save(&output)
        .unwrap_or_else(|e| panic!("failed to write {output}: {e}"));

    println!("{output} ({}x{})", result.width(), result.height());
}
