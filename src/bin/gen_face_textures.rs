//! Generates the six die face textures (assets/dice1.png .. dice6.png) as
//! classic pip layouts, so the repository carries no binary assets.

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

const SIZE: u32 = 256;
const PIP_RADIUS: i32 = 26;
const BORDER: u32 = 8;

const FACE_COLOR: Rgba<u8> = Rgba([245, 242, 232, 255]);
const PIP_COLOR: Rgba<u8> = Rgba([24, 22, 20, 255]);
const BORDER_COLOR: Rgba<u8> = Rgba([180, 172, 158, 255]);

fn main() {
    let out_dir = PathBuf::from("assets");
    fs::create_dir_all(&out_dir).expect("create assets dir");

    for value in 1..=6u32 {
        let face = render_face(value);
        write_png(&out_dir.join(format!("dice{value}.png")), &face);
    }

    println!("Wrote face textures to {}", out_dir.display());
}

fn write_png(path: &Path, image: &RgbaImage) {
    image
        .save(path)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}

fn render_face(value: u32) -> RgbaImage {
    let mut face = RgbaImage::from_pixel(SIZE, SIZE, FACE_COLOR);

    for y in 0..SIZE {
        for x in 0..SIZE {
            let edge = x < BORDER || y < BORDER || x >= SIZE - BORDER || y >= SIZE - BORDER;
            if edge {
                face.put_pixel(x, y, BORDER_COLOR);
            }
        }
    }

    for (fx, fy) in pip_layout(value) {
        draw_pip(
            &mut face,
            (fx * SIZE as f32) as i32,
            (fy * SIZE as f32) as i32,
        );
    }

    face
}

/// Pip centers in face-relative [0, 1] coordinates.
fn pip_layout(value: u32) -> Vec<(f32, f32)> {
    const C: f32 = 0.5;
    const LO: f32 = 0.27;
    const HI: f32 = 0.73;

    match value {
        1 => vec![(C, C)],
        2 => vec![(LO, LO), (HI, HI)],
        3 => vec![(LO, LO), (C, C), (HI, HI)],
        4 => vec![(LO, LO), (HI, LO), (LO, HI), (HI, HI)],
        5 => vec![(LO, LO), (HI, LO), (C, C), (LO, HI), (HI, HI)],
        _ => vec![(LO, LO), (HI, LO), (LO, C), (HI, C), (LO, HI), (HI, HI)],
    }
}

fn draw_pip(image: &mut RgbaImage, cx: i32, cy: i32) {
    for dy in -PIP_RADIUS..=PIP_RADIUS {
        for dx in -PIP_RADIUS..=PIP_RADIUS {
            if dx * dx + dy * dy > PIP_RADIUS * PIP_RADIUS {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 && (x as u32) < SIZE && (y as u32) < SIZE {
                image.put_pixel(x as u32, y as u32, PIP_COLOR);
            }
        }
    }
}
