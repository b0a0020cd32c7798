use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::model::{Hospital, Procedure};

const BUNDLED_PROCEDURES: &str = include_str!("../data/procedures.json");
const BUNDLED_HOSPITALS: &str = include_str!("../data/hospitals.json");

/// Unvalidated catalog contents, in load order.
#[derive(Debug, Clone, Default)]
pub struct RawCatalog {
    pub procedures: Vec<Procedure>,
    pub hospitals: Vec<Hospital>,
}

/// Trait for anything that can produce catalog records.
/// This allows swapping file-backed data for fixtures or the bundled sample.
pub trait CatalogSource: Send + Sync {
    /// Human-readable origin, used in load logs.
    fn describe(&self) -> String;
    /// Read every procedure and hospital record.
    fn read(&self) -> Result<RawCatalog, CatalogError>;
}

/// Two JSON array files: one of procedures, one of hospitals.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub procedures_path: PathBuf,
    pub hospitals_path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: Into<PathBuf>, H: Into<PathBuf>>(procedures_path: P, hospitals_path: H) -> Self {
        Self {
            procedures_path: procedures_path.into(),
            hospitals_path: hospitals_path.into(),
        }
    }
}

impl CatalogSource for JsonFileSource {
    fn describe(&self) -> String {
        format!(
            "files({}, {})",
            self.procedures_path.display(),
            self.hospitals_path.display()
        )
    }

    fn read(&self) -> Result<RawCatalog, CatalogError> {
        let read = |path: &PathBuf| {
            fs::read_to_string(path).map_err(|source| CatalogError::Read {
                path: path.clone(),
                source,
            })
        };
        let procedures = read(&self.procedures_path)?;
        let hospitals = read(&self.hospitals_path)?;
        parse_raw(&procedures, &hospitals)
    }
}

/// JSON documents already held in memory.
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    pub procedures: String,
    pub hospitals: String,
}

impl JsonStrSource {
    pub fn new<P: Into<String>, H: Into<String>>(procedures: P, hospitals: H) -> Self {
        Self {
            procedures: procedures.into(),
            hospitals: hospitals.into(),
        }
    }
}

impl CatalogSource for JsonStrSource {
    fn describe(&self) -> String {
        "inline json".to_string()
    }

    fn read(&self) -> Result<RawCatalog, CatalogError> {
        parse_raw(&self.procedures, &self.hospitals)
    }
}

/// The sample catalog compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl CatalogSource for BundledSource {
    fn describe(&self) -> String {
        "bundled sample".to_string()
    }

    fn read(&self) -> Result<RawCatalog, CatalogError> {
        parse_raw(BUNDLED_PROCEDURES, BUNDLED_HOSPITALS)
    }
}

fn parse_raw(procedures: &str, hospitals: &str) -> Result<RawCatalog, CatalogError> {
    Ok(RawCatalog {
        procedures: parse_json("procedures", procedures)?,
        hospitals: parse_json("hospitals", hospitals)?,
    })
}

fn parse_json<T: DeserializeOwned>(what: &'static str, raw: &str) -> Result<T, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Parse { what, source })
}

/// Configuration for selecting and building a catalog source.
///
/// ```
/// use catalog::SourceConfig;
///
/// let bundled = SourceConfig::bundled();
/// let on_disk = SourceConfig::files("data/procedures.json", "data/hospitals.json");
/// # let _ = (bundled, on_disk);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceConfig {
    /// The sample data shipped with the crate.
    #[default]
    Bundled,
    /// Procedures and hospitals read from two JSON files.
    Files {
        procedures_path: PathBuf,
        hospitals_path: PathBuf,
    },
}

impl SourceConfig {
    pub fn bundled() -> Self {
        SourceConfig::Bundled
    }

    pub fn files<P: Into<PathBuf>, H: Into<PathBuf>>(procedures_path: P, hospitals_path: H) -> Self {
        SourceConfig::Files {
            procedures_path: procedures_path.into(),
            hospitals_path: hospitals_path.into(),
        }
    }

    /// Build the source described by this configuration.
    pub fn build(&self) -> Box<dyn CatalogSource> {
        match self {
            SourceConfig::Bundled => Box::new(BundledSource),
            SourceConfig::Files {
                procedures_path,
                hospitals_path,
            } => Box::new(JsonFileSource::new(
                procedures_path.clone(),
                hospitals_path.clone(),
            )),
        }
    }
}

/// Config for loading a catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Where records come from.
    pub source: SourceConfig,
    /// Reject catalogs with consistency issues instead of logging them.
    pub strict: bool,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_source_parses() {
        let raw = BundledSource.read().expect("bundled data parses");
        assert!(!raw.procedures.is_empty());
        assert!(!raw.hospitals.is_empty());
        assert_eq!(raw.procedures[0].cpt_code, "72148");
    }

    #[test]
    fn file_source_reads_both_files() {
        let mut procedures = tempfile::NamedTempFile::new().unwrap();
        let mut hospitals = tempfile::NamedTempFile::new().unwrap();
        write!(
            procedures,
            r#"[{{"cpt_code":"93000","name":"ECG","category":"Cardiology","description":"d"}}]"#
        )
        .unwrap();
        write!(hospitals, "[]").unwrap();

        let source = JsonFileSource::new(procedures.path(), hospitals.path());
        let raw = source.read().expect("files parse");
        assert_eq!(raw.procedures.len(), 1);
        assert!(raw.procedures[0].insights.is_empty());
        assert!(raw.hospitals.is_empty());
        assert!(source.describe().starts_with("files("));
    }

    #[test]
    fn missing_file_reports_path() {
        let source = JsonFileSource::new("/nonexistent/procedures.json", "/nonexistent/h.json");
        match source.read() {
            Err(CatalogError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/procedures.json"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_names_the_document() {
        let source = JsonStrSource::new("[]", "{not json");
        match source.read() {
            Err(CatalogError::Parse { what, .. }) => assert_eq!(what, "hospitals"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
