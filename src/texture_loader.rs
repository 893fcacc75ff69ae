use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Clockwise quarter turns needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Upright {
    AsIs,
    Clockwise,
    HalfTurn,
    CounterClockwise,
}

impl Upright {
    /// Maps an EXIF orientation tag. Mirrored orientations are shown as-is.
    pub fn from_exif_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Upright::HalfTurn,
            6 => Upright::Clockwise,
            8 => Upright::CounterClockwise,
            _ => Upright::AsIs,
        }
    }
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("no image files found in directory {}", dir_path.display());
    }
    Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal, the image is shown unrotated
            warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation ---
pub fn load_image_upright(image_path: &Path) -> Result<Image> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    // EXIF is only reliable for JPEG
    let upright = if extension == "jpg" || extension == "jpeg" {
        Upright::from_exif_orientation(read_orientation(image_path, &file_bytes))
    } else {
        Upright::AsIs
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    match upright {
        Upright::AsIs => {}
        Upright::Clockwise => image.rotate_cw(),
        Upright::HalfTurn => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Upright::CounterClockwise => image.rotate_ccw(),
    }
    if upright != Upright::AsIs {
        debug!(path = %image_path.display(), ?upright, "applied EXIF rotation");
    }

    Ok(image)
}

pub fn load_texture_upright(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let image = load_image_upright(image_path)?;
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {}", image_path.display(), e))
}
