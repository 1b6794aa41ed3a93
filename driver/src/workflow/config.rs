use anyhow::Context;
use mwpotdata::prelude::ReaderConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the reader settings from a YAML file; missing keys keep their defaults.
pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<ReaderConfig> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading driver config {}", path_ref.display()))?;
    let config: ReaderConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing driver config {}", path_ref.display()))?;
    Ok(config)
}

pub fn from_args(data_root: PathBuf, dsinl: f64, bin: bool) -> ReaderConfig {
    ReaderConfig {
        dsinl,
        bin,
        ..ReaderConfig::with_root(data_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_sets_every_field() {
        let cfg = from_args(PathBuf::from("/srv/data"), 0.1, false);
        assert_eq!(cfg.data_root, PathBuf::from("/srv/data"));
        assert_eq!(cfg.dsinl, 0.1);
        assert!(!cfg.bin);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"data_root: /srv/data\ndsinl: 0.125\n").unwrap();
        let path = temp.into_temp_path();
        let cfg = load(&path).unwrap();
        assert_eq!(cfg.data_root, PathBuf::from("/srv/data"));
        assert_eq!(cfg.dsinl, 0.125);
        assert!(cfg.bin);
    }

    #[test]
    fn config_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("reading driver config"));
    }
}
