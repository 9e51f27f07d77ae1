use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::inventory::Inventory;

pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Reads a full snapshot into a new inventory. The caller's inventory is not
/// touched, so a corrupt file can't leave it half replaced.
pub fn load(path: &Path) -> Result<Inventory> {
    let reader = BufReader::new(File::open(path)?);
    let inventory: Inventory = serde_json::from_reader(reader)?;
    info!(path = %path.display(), records = inventory.len(), "loaded inventory");
    Ok(inventory)
}

/// Writes the whole inventory to `path`, replacing any previous snapshot.
/// Data goes to a sibling temporary file first and is renamed into place
/// once flushed.
pub fn save(path: &Path, inventory: &Inventory) -> Result<()> {
    let tmp_path = temp_path(path);
    let result = write_snapshot(&tmp_path, inventory)
        .and_then(|()| std::fs::rename(&tmp_path, path).map_err(Error::from));
    if let Err(e) = result {
        if tmp_path.exists() && std::fs::remove_file(&tmp_path).is_err() {
            warn!(path = %tmp_path.display(), "unable to remove partial snapshot");
        }
        return Err(e);
    }
    info!(path = %path.display(), records = inventory.len(), "saved inventory");
    Ok(())
}

fn write_snapshot(path: &Path, inventory: &Inventory) -> Result<()> {
    let mut writer = BufWriter::new(
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?);
    serde_json::to_writer_pretty(&mut writer, inventory)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::{exists, load, save, temp_path};
    use crate::error::Error;
    use crate::inventory::{Inventory, Record};

    #[test]
    fn exists_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");
        assert!(!exists(&path));
        std::fs::write(&path, "[]").unwrap();
        assert!(exists(&path));
        assert!(!exists(dir.path()));
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");

        let empty = Inventory::new();
        save(&path, &empty).unwrap();
        assert_eq!(load(&path).unwrap(), empty);

        let inventory = Inventory::from(vec![
            Record::new(3, "Title, with comma", "Someone"),
            Record::new(-1, "", "   padded   "),
            Record::new(3, "Line\nbreak", "Ünïcödé"),
            Record::new(i64::MAX, "Max", "Min"),
        ]);
        save(&path, &inventory).unwrap();
        assert_eq!(load(&path).unwrap(), inventory);
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");
        save(&path, &Inventory::from(vec![Record::new(1, "A", "X"), Record::new(2, "B", "Y")])).unwrap();
        save(&path, &Inventory::from(vec![Record::new(9, "Z", "Q")])).unwrap();
        assert_eq!(load(&path).unwrap().records(), &[Record::new(9, "Z", "Q")]);
    }

    #[test]
    fn snapshot_format_is_a_record_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");
        save(&path, &Inventory::from(vec![Record::new(1, "A", "X")])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([{ "id": 1, "title": "A", "creator": "X" }]));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(&dir.path().join("missing.dat")), Err(Error::Io(_))));
    }

    #[test]
    fn load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(matches!(load(&path), Err(Error::Serde(_))));

        std::fs::write(&path, r#"[{"id":"one","title":"A","creator":"X"}]"#).unwrap();
        assert!(matches!(load(&path), Err(Error::Serde(_))));
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.dat");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "").unwrap();

        let result = save(&path, &Inventory::from(vec![Record::new(1, "A", "X")]));
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!temp_path(&path).exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("inventory.dat");
        let result = save(&path, &Inventory::from(vec![Record::new(1, "A", "X")]));
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!path.exists());
    }
}
