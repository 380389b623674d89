//! Shared fixtures: a temporary data directory and tiny image files.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use card_table::{Game, Storage, TableConfig};
use tempfile::TempDir;

/// Smallest prefix `image::guess_format` recognises as PNG.
pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";

/// Smallest prefix `image::guess_format` recognises as JPEG.
pub const JPEG: &[u8] = b"\xff\xd8\xff\xe0\0\x10JFIF\0\x01";

pub const TESTNAME: &str = "test_game";
pub const TESTNAME2: &str = "test_game2";

/// Temporary table: data directory plus a folder of source images.
pub struct Fixture {
    pub dir: TempDir,
    pub storage: Storage,
}

impl Fixture {
    /// JSON documents on disk, fixed shuffle seed.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = TableConfig::new(dir.path().join("data")).with_seed(42);
        let storage = Storage::new(config);
        Self { dir, storage }
    }

    /// Documents in memory, images on disk.
    pub fn in_memory() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = TableConfig::new(dir.path().join("data")).with_seed(42);
        let storage = Storage::in_memory(config);
        Self { dir, storage }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.storage.config().data_dir.clone()
    }

    /// Folder for source images, created on demand.
    pub fn source_dir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join("sources").join(name);
        fs::create_dir_all(&path).expect("source dir");
        path
    }

    /// Write a PNG in the default source folder.
    pub fn png(&self, file_name: &str) -> PathBuf {
        write_image(&self.source_dir("cards"), file_name, PNG)
    }

    /// Write a JPEG in the default source folder.
    pub fn jpeg(&self, file_name: &str) -> PathBuf {
        write_image(&self.source_dir("cards"), file_name, JPEG)
    }

    /// Write a non-image file in the default source folder.
    pub fn text(&self, file_name: &str) -> PathBuf {
        write_image(&self.source_dir("cards"), file_name, b"not an image at all")
    }

    /// Open the test game.
    pub fn game(&self) -> Game {
        Game::open(TESTNAME, self.storage.clone()).expect("open game")
    }

    /// Open the test game with card `name` imported from `carreau.png` / `pic.png`.
    pub fn game_with_card(&self, name: &str) -> Game {
        let mut game = self.game();
        let recto = self.png("carreau.png");
        let verso = self.png("pic.png");
        game.import_card(&recto, &verso, Some(name)).expect("import card");
        game
    }

    pub fn box_file(&self, game: &str, file_name: &str) -> PathBuf {
        self.storage.config().box_dir(game).join(file_name)
    }

    pub fn deck_file(&self, game: &str, file_name: &str) -> PathBuf {
        self.storage.config().deck_dir(game).join(file_name)
    }
}

pub fn write_image(dir: &Path, file_name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, bytes).expect("write image");
    path
}
