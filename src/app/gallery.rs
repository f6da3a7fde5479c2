// SPDX-License-Identifier: MPL-2.0
//! Demo gallery: the images given on the command line, one lightbox each.

use crate::error::{Error, Result};
use crate::lightbox::{Lightbox, LightboxId, Props};
use iced::widget::image;
use std::path::{Path, PathBuf};

/// Image file extensions the renderer can decode.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// One thumbnail and its lightbox.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub handle: image::Handle,
    pub lightbox: Lightbox,
}

impl Entry {
    #[must_use]
    pub fn new(id: LightboxId, path: PathBuf, props: Props) -> Self {
        Self {
            handle: image::Handle::from_path(&path),
            lightbox: Lightbox::new(id, props),
            path,
        }
    }

    /// File name for messages, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Builds the gallery entries, ids following input order.
#[must_use]
pub fn entries(paths: Vec<PathBuf>, props: Props) -> Vec<Entry> {
    paths
        .into_iter()
        .enumerate()
        .map(|(id, path)| Entry::new(id, path, props))
        .collect()
}

#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Supported images directly inside `directory`, sorted by file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

/// Images found on the command line, and the inputs that could not be used.
#[derive(Debug, Default)]
pub struct Collected {
    pub images: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, Error)>,
}

/// Expands command-line inputs: files are kept when supported, directories
/// are scanned. Unusable inputs are logged and reported in `skipped`.
#[must_use]
pub fn collect_images(inputs: &[PathBuf]) -> Collected {
    let mut collected = Collected::default();

    for input in inputs {
        match resolve_input(input) {
            Ok(found) => collected.images.extend(found),
            Err(err) => {
                tracing::warn!(path = %input.display(), %err, "skipping input");
                collected.skipped.push((input.clone(), err));
            }
        }
    }

    collected
}

fn resolve_input(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_dir() {
        scan_directory(input)
    } else if input.is_file() {
        if is_supported_image(input) {
            Ok(vec![input.to_path_buf()])
        } else {
            Err(Error::Io(format!("unsupported image format: {}", input.display())))
        }
    } else {
        Err(Error::Io(format!("no such file or directory: {}", input.display())))
    }
}
