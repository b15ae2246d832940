use std::{
    cmp::Reverse,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{ConfigError, EngineConfig};

const CONFIG_FILE: &str = "config.json";
const BACKUP_PREFIX: &str = "config";
const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const MAX_BACKUP_ATTEMPTS: u32 = 1000;
const TMP_SUFFIX: &str = "tmp";

/// Loads, saves and snapshots [`EngineConfig`] files.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    backups_dir: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf, backups_dir: PathBuf) -> Self {
        Self {
            config_path,
            backups_dir,
        }
    }

    /// Lays out `<base>/config/config.json` and `<base>/config/backups/`.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join("config");
        let backups_dir = config_dir.join("backups");
        fs::create_dir_all(&backups_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE), backups_dir))
    }

    pub fn with_default_base_dir() -> Result<Self, ConfigError> {
        Self::with_base_dir(EngineConfig::resolve_default_base_dir())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    /// Returns the stored config, or the defaults when nothing was saved yet.
    pub fn load(&self) -> Result<EngineConfig, ConfigError> {
        if !self.config_path.exists() {
            return Ok(EngineConfig::default());
        }
        let config = read_config(&self.config_path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &EngineConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let tmp = tmp_path(&self.config_path);
        write_json(&tmp, config)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }

    /// Writes a timestamped copy of `config` and returns the backup file name.
    /// Backups taken within the same millisecond get a sequence suffix; an
    /// existing backup is never overwritten.
    pub fn backup(&self, config: &EngineConfig) -> Result<String, ConfigError> {
        let now = Utc::now();
        let stamp = format!(
            "{}_{:03}",
            now.format(BACKUP_TIMESTAMP_FORMAT),
            now.timestamp_subsec_millis()
        );
        fs::create_dir_all(&self.backups_dir)?;
        for seq in 0..MAX_BACKUP_ATTEMPTS {
            let name = match seq {
                0 => format!("{BACKUP_PREFIX}_{stamp}.{BACKUP_EXTENSION}"),
                n => format!("{BACKUP_PREFIX}_{stamp}_{n}.{BACKUP_EXTENSION}"),
            };
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.backups_dir.join(&name))
            {
                Ok(file) => {
                    write_json_to(file, config)?;
                    return Ok(name);
                }
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(err.into()),
            }
        }
        Err(ConfigError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free backup name for timestamp {stamp}"),
        )))
    }

    pub fn restore(&self, backup_name: &str) -> Result<EngineConfig, ConfigError> {
        check_backup_name(backup_name)?;
        let path = self.backups_dir.join(backup_name);
        if !path.exists() {
            return Err(ConfigError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("configuration backup `{backup_name}` not found"),
            )));
        }
        let config = read_config(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Lists backup names, newest first.
    pub fn list_backups(&self) -> Result<Vec<String>, ConfigError> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(name.to_string());
            }
        }
        entries.sort_by_key(|name| Reverse(parse_backup_stamp(name)));
        Ok(entries)
    }
}

fn read_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
}

/// Backup names must be plain file names inside the backups directory.
fn check_backup_name(name: &str) -> Result<(), ConfigError> {
    let plain = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name);
    if plain {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "backup name `{name}` must be a file name inside the backups directory"
        )))
    }
}

/// Sort key for a backup name: timestamp, milliseconds, sequence.
fn parse_backup_stamp(name: &str) -> Option<(DateTime<Utc>, u32, u32)> {
    let raw = name
        .strip_prefix(&format!("{BACKUP_PREFIX}_"))?
        .strip_suffix(&format!(".{BACKUP_EXTENSION}"))?;
    let mut parts = raw.split('_');
    let date = parts.next()?;
    let time = parts.next()?;
    let millis = parts.next().map_or(Some(0), |part| part.parse().ok())?;
    let seq = parts.next().map_or(Some(0), |part| part.parse().ok())?;
    if parts.next().is_some() {
        return None;
    }
    let naive =
        NaiveDateTime::parse_from_str(&format!("{date}_{time}"), BACKUP_TIMESTAMP_FORMAT).ok()?;
    Some((DateTime::from_naive_utc_and_offset(naive, Utc), millis, seq))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_json(path: &Path, config: &EngineConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_json_to(File::create(path)?, config)
}

fn write_json_to(mut file: File, config: &EngineConfig) -> Result<(), ConfigError> {
    let json =
        serde_json::to_string_pretty(config).map_err(|err| ConfigError::Serde(err.to_string()))?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_names_sort_by_embedded_stamp() {
        let older = parse_backup_stamp("config_20250102_030405_120.json").unwrap();
        let same_ms = parse_backup_stamp("config_20250102_030405_120_1.json").unwrap();
        let newer = parse_backup_stamp("config_20250102_030406_000.json").unwrap();
        assert!(older < same_ms && same_ms < newer);
        assert!(parse_backup_stamp("config_20250102_030405.json").is_some());
        assert!(parse_backup_stamp("config_garbage.json").is_none());
        assert!(parse_backup_stamp("notes.json").is_none());
    }

    #[test]
    fn backup_names_must_stay_in_backups_dir() {
        assert!(check_backup_name("config_20250102_030405_120.json").is_ok());
        for name in ["", ".", "..", "../config.json", "sub/config.json", "..\\config.json"] {
            assert!(matches!(check_backup_name(name), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/x/config.json"));
        assert_eq!(tmp, PathBuf::from("/x/config.json.tmp"));
    }
}
