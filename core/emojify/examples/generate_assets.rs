//! Generate the eight placeholder emoji assets.
//!
//! Usage:
//!   cargo run --example generate_assets [output_dir]
//!
//! Writes `smile.png`, `rightwink.png`, … into the output directory
//! (default: `assets/emoji`), sized for overlaying on faces. The drawings
//! are deliberately plain: a flat disc with eyes and a mouth, enough to
//! tell the eight categories apart at a glance.

use emojify::EmojiCategory;
use image::{Rgba, RgbaImage};

const SIZE: u32 = 128;

const FACE: Rgba<u8> = Rgba([255, 205, 60, 255]);
const INK: Rgba<u8> = Rgba([60, 40, 20, 255]);

fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn draw_eye(img: &mut RgbaImage, cx: f32, cy: f32, open: bool) {
    if open {
        fill_circle(img, cx, cy, SIZE as f32 * 0.06, INK);
    } else {
        // Closed eye: a flat bar.
        let half_width = (SIZE as f32 * 0.08) as i32;
        for dx in -half_width..=half_width {
            for dy in -2..=2 {
                let x = (cx as i32 + dx) as u32;
                let y = (cy as i32 + dy) as u32;
                if x < SIZE && y < SIZE {
                    img.put_pixel(x, y, INK);
                }
            }
        }
    }
}

fn draw_mouth(img: &mut RgbaImage, smiling: bool) {
    let cx = SIZE as f32 / 2.0;
    let base = SIZE as f32 * 0.66;
    let half = SIZE as f32 * 0.22;
    let bow_height = SIZE as f32 * 0.10;

    for dx in -(half as i32)..=(half as i32) {
        let t = dx as f32 / half;
        let bow = (1.0 - t * t) * bow_height;
        let y = if smiling {
            base + bow
        } else {
            base + bow_height - bow
        };
        let x = (cx + dx as f32) as u32;
        for dy in 0..4 {
            let yy = y as u32 + dy;
            if x < SIZE && yy < SIZE {
                img.put_pixel(x, yy, INK);
            }
        }
    }
}

fn draw_emoji(category: EmojiCategory) -> RgbaImage {
    let code = category.code();
    let smiling = code & 0b100 != 0;
    let left_open = code & 0b010 != 0;
    let right_open = code & 0b001 != 0;

    let mut img = RgbaImage::new(SIZE, SIZE);
    let center = SIZE as f32 / 2.0;
    fill_circle(&mut img, center, center, SIZE as f32 * 0.48, FACE);

    // Mirrored view: the subject's left eye sits on the viewer's right.
    let eye_y = SIZE as f32 * 0.40;
    draw_eye(&mut img, SIZE as f32 * 0.65, eye_y, left_open);
    draw_eye(&mut img, SIZE as f32 * 0.35, eye_y, right_open);
    draw_mouth(&mut img, smiling);

    img
}

fn main() {
    let dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/emoji".to_string());
    std::fs::create_dir_all(&dir).expect("failed to create output directory");

    for category in EmojiCategory::ALL {
        let img = draw_emoji(category);
        let path = format!("{dir}/{}.png", category.asset_name());
        img.save(&path)
            .unwrap_or_else(|e| panic!("failed to write {path}: {e}"));
        println!("  {path} ({SIZE}x{SIZE})");
    }
}
