use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::ledger::Ledger;

use super::{Result, StorageBackend};

const LEDGER_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores ledger snapshots as pretty-printed JSON files, one per ledger,
/// written atomically (temp file then rename).
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    ledgers_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        ensure_dir(&root)?;
        let ledgers_dir = root.join("ledgers");
        ensure_dir(&ledgers_dir)?;
        Ok(Self { root, ledgers_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ledger_path(&self, name: &str) -> PathBuf {
        self.ledgers_dir
            .join(format!("{}.{}", canonical_name(name), LEDGER_EXTENSION))
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, ledger: &Ledger, name: &str) -> Result<()> {
        save_ledger_to_path(ledger, &self.ledger_path(name))
    }

    fn load(&self, name: &str) -> Result<Ledger> {
        load_ledger_from_path(&self.ledger_path(name))
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.ledgers_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.ledgers_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(LEDGER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    write_atomic(path, &json)
}

pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("finance_core")
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Lowercase alphanumerics with dash separators; keeps file names portable.
fn canonical_name(name: &str) -> String {
    let mut canonical = String::new();
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            canonical.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !canonical.is_empty() && !last_dash {
            canonical.push('-');
            last_dash = true;
        }
    }
    let trimmed = canonical.trim_end_matches('-');
    if trimmed.is_empty() {
        "ledger".to_string()
    } else {
        trimmed.to_string()
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
