//! Card and sticker import.
//!
//! Imported images are copied into the game's box folder as
//! `{card}_recto.{ext}` / `{card}_verso.{ext}` (cards) or `{sticker}.{ext}`
//! (stickers). The sources are left untouched.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::Game;
use crate::cards::CardRecord;
use crate::core::{GameError, Result};

impl Game {
    /// Import a card into the box.
    ///
    /// `card_name` defaults to the recto file stem. Returns the card name.
    pub fn import_card(
        &mut self,
        recto_path: impl AsRef<Path>,
        verso_path: impl AsRef<Path>,
        card_name: Option<&str>,
    ) -> Result<String> {
        let (recto_path, verso_path) = (recto_path.as_ref(), verso_path.as_ref());
        let assets = self.storage.assets();
        for path in [recto_path, verso_path] {
            if !assets.is_image(path) {
                return Err(GameError::NotAnImage(path.to_path_buf()).into());
            }
        }

        let card_name = match card_name {
            Some(name) => name.to_string(),
            None => file_stem(recto_path)?,
        };
        validate_asset_name(&card_name)?;
        if self.data.contains(&card_name) {
            return Err(GameError::DuplicateCard(card_name).into());
        }

        let folder = self.storage.config().box_dir(&self.name);
        let dst_recto = folder.join(with_extension(format!("{card_name}_recto"), recto_path));
        let dst_verso = folder.join(with_extension(format!("{card_name}_verso"), verso_path));
        for dst in [&dst_recto, &dst_verso] {
            if assets.exists(dst) {
                return Err(GameError::AssetCollision(dst.clone()).into());
            }
        }

        assets.create_dir_all(&folder)?;
        assets.copy(recto_path, &dst_recto)?;
        assets.copy(verso_path, &dst_verso)?;

        let record = CardRecord::new(card_name.clone(), dst_recto, dst_verso);
        self.data.box_cards.insert(card_name.clone(), record);
        self.save()?;
        info!(game = %self.name, card = %card_name, "imported card");
        Ok(card_name)
    }

    /// Import every image pair of a folder.
    ///
    /// Images are sorted by file name and taken two by two (recto, verso).
    /// A trailing unpaired image is skipped. Cards are named
    /// `{folder name}_{recto stem}`. Stops at the first error; cards imported
    /// before it stay imported.
    pub fn import_cards_folder(&mut self, folder_path: impl AsRef<Path>) -> Result<Vec<String>> {
        let folder_path = folder_path.as_ref();
        let images = self.storage.assets().list_images(folder_path)?;
        let prefix = folder_name(folder_path);

        if images.len() % 2 == 1 {
            if let Some(dropped) = images.last() {
                warn!(file = %dropped.display(), "odd number of images, last one skipped");
            }
        }

        let mut imported = Vec::with_capacity(images.len() / 2);
        for pair in images.chunks_exact(2) {
            let name = format!("{prefix}_{}", file_stem(&pair[0])?);
            imported.push(self.import_card(&pair[0], &pair[1], Some(&name))?);
        }
        Ok(imported)
    }

    /// Import a sticker image.
    ///
    /// `sticker_name` defaults to the file stem. Returns the sticker name.
    pub fn import_sticker(&mut self, img_path: impl AsRef<Path>, sticker_name: Option<&str>) -> Result<String> {
        let img_path = img_path.as_ref();
        let assets = self.storage.assets();
        if !assets.is_image(img_path) {
            return Err(GameError::NotAnImage(img_path.to_path_buf()).into());
        }

        let sticker_name = match sticker_name {
            Some(name) => name.to_string(),
            None => file_stem(img_path)?,
        };
        validate_asset_name(&sticker_name)?;
        if self.data.stickers.contains_key(&sticker_name) {
            return Err(GameError::DuplicateSticker(sticker_name).into());
        }

        let folder = self.storage.config().box_dir(&self.name);
        let dst = folder.join(with_extension(sticker_name.clone(), img_path));
        if assets.exists(&dst) {
            return Err(GameError::AssetCollision(dst).into());
        }

        assets.create_dir_all(&folder)?;
        assets.copy(img_path, &dst)?;
        self.data.stickers.insert(sticker_name.clone(), dst);
        self.save()?;
        info!(game = %self.name, sticker = %sticker_name, "imported sticker");
        Ok(sticker_name)
    }

    /// Import every image of a folder as a sticker named after its file stem.
    pub fn import_stickers_folder(&mut self, folder_path: impl AsRef<Path>) -> Result<Vec<String>> {
        let images = self.storage.assets().list_images(folder_path.as_ref())?;
        images
            .iter()
            .map(|path| self.import_sticker(path, None))
            .collect()
    }

    /// Remove a sticker and its image.
    pub fn delete_sticker(&mut self, sticker_name: &str) -> Result<()> {
        let Some(path) = self.data.stickers.get(sticker_name) else {
            return Err(GameError::UnknownSticker(sticker_name.to_string()).into());
        };
        remove_if_present(self, path.clone())?;
        self.data.stickers.remove(sticker_name);
        self.save()?;
        info!(game = %self.name, sticker = sticker_name, "deleted sticker");
        Ok(())
    }
}

/// Delete a file, treating an already missing file as deleted.
pub(super) fn remove_if_present(game: &Game, path: PathBuf) -> Result<()> {
    match game.storage.assets().remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(file = %path.display(), "image already gone");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// `base` plus the extension of `source`, if any.
fn with_extension(base: String, source: &Path) -> String {
    match source.extension().and_then(OsStr::to_str) {
        Some(ext) => format!("{base}.{ext}"),
        None => base,
    }
}

fn file_stem(path: &Path) -> Result<String, GameError> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GameError::InvalidName(path.display().to_string()))
}

fn folder_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .or_else(|| {
            folder
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|s| s.to_string_lossy().into_owned()))
        })
        .unwrap_or_default()
}

/// Card and sticker names end up in file names.
fn validate_asset_name(name: &str) -> Result<(), GameError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(GameError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_extension() {
        assert_eq!(with_extension("c_recto".into(), Path::new("/x/a.png")), "c_recto.png");
        assert_eq!(with_extension("c_recto".into(), Path::new("/x/a")), "c_recto");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("/cards/carreau.png")).unwrap(), "carreau");
        assert!(file_stem(Path::new("/")).is_err());
    }

    #[test]
    fn test_folder_name() {
        assert_eq!(folder_name(Path::new("/cards/set1")), "set1");
        assert_eq!(folder_name(Path::new("/cards/set1/")), "set1");
    }

    #[test]
    fn test_validate_asset_name() {
        assert!(validate_asset_name("dragon").is_ok());
        assert!(validate_asset_name("").is_err());
        assert!(validate_asset_name("..").is_err());
        assert!(validate_asset_name("a/b").is_err());
    }
}
