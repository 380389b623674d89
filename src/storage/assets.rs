//! Card image files.
//!
//! The game never opens images itself. It asks an `AssetStore` whether a file
//! is an image, and copies, moves or removes files between its box and deck
//! folders. `FsAssets` does this on the local file system and recognises
//! images by their magic bytes, not their extension.

use std::fs::{self, File};
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Bytes read from the head of a file to sniff its format.
const SNIFF_LEN: usize = 32;

/// File operations the game needs for card and sticker images.
pub trait AssetStore {
    /// Check if `path` is a readable image file.
    fn is_image(&self, path: &Path) -> bool;

    /// Check if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and its parents.
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;

    /// Copy a file, leaving the source in place.
    fn copy(&self, src: &Path, dst: &Path) -> io::Result<()>;

    /// Move a file.
    fn move_file(&self, src: &Path, dst: &Path) -> io::Result<()>;

    /// Delete a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Delete a directory tree. Returns `false` if it did not exist.
    fn remove_dir_all(&self, dir: &Path) -> io::Result<bool>;

    /// Image files directly inside `dir`, sorted by file name.
    fn list_images(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Local file system assets.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsAssets;

impl FsAssets {
    /// Create the file system store.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AssetStore for FsAssets {
    fn is_image(&self, path: &Path) -> bool {
        let Ok(mut file) = File::open(path) else {
            return false;
        };
        let mut head = Vec::with_capacity(SNIFF_LEN);
        if file.by_ref().take(SNIFF_LEN as u64).read_to_end(&mut head).is_err() {
            return false;
        }
        image::guess_format(&head).is_ok()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn copy(&self, src: &Path, dst: &Path) -> io::Result<()> {
        fs::copy(src, dst).map(|_| ())
    }

    fn move_file(&self, src: &Path, dst: &Path) -> io::Result<()> {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        match fs::rename(src, dst) {
            Ok(()) => Ok(()),
            // Cross-device: fall back to copy + delete.
            Err(_) if src.is_file() => {
                fs::copy(src, dst)?;
                fs::remove_file(src)
            }
            Err(e) => Err(e),
        }
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir_all(&self, dir: &Path) -> io::Result<bool> {
        match fs::remove_dir_all(dir) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn list_images(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && self.is_image(&path) {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}
