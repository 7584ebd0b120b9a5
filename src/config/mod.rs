use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_chart_path")]
    pub chart_path: String,
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
    #[serde(default = "default_glossary_file")]
    pub glossary_file: String,
    /// Rows at the top of the glossary sheet holding titles and metadata.
    #[serde(default = "default_glossary_header_rows")]
    pub glossary_header_rows: usize,
    /// 1-based column holding the term (column D).
    #[serde(default = "default_glossary_term_column")]
    pub glossary_term_column: usize,
    /// 1-based column holding the explanation (column H).
    #[serde(default = "default_glossary_explanation_column")]
    pub glossary_explanation_column: usize,
    #[serde(default = "default_glossary_max_suggestions")]
    pub glossary_max_suggestions: usize,
    /// TrueType font used for chart labels; system fonts are probed when unset.
    #[serde(default)]
    pub chart_font: Option<String>,
}

fn default_chart_path() -> String {
    Config::config_dir()
        .join("category_chart.png")
        .to_string_lossy()
        .to_string()
}
fn default_reports_dir() -> String {
    Config::config_dir()
        .join("reports")
        .to_string_lossy()
        .to_string()
}
fn default_glossary_file() -> String {
    "Daten.xlsx".to_string()
}
fn default_glossary_header_rows() -> usize {
    13
}
fn default_glossary_term_column() -> usize {
    4
}
fn default_glossary_explanation_column() -> usize {
    8
}
fn default_glossary_max_suggestions() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            chart_path: default_chart_path(),
            reports_dir: default_reports_dir(),
            glossary_file: default_glossary_file(),
            glossary_header_rows: default_glossary_header_rows(),
            glossary_term_column: default_glossary_term_column(),
            glossary_explanation_column: default_glossary_explanation_column(),
            glossary_max_suggestions: default_glossary_max_suggestions(),
            chart_font: None,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworklog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn chart_file(&self) -> PathBuf {
        expand_tilde(&self.chart_path)
    }

    pub fn reports_path(&self) -> PathBuf {
        expand_tilde(&self.reports_dir)
    }

    pub fn glossary_path(&self) -> PathBuf {
        expand_tilde(&self.glossary_file)
    }

    pub fn chart_font_path(&self) -> Option<PathBuf> {
        self.chart_font.as_deref().map(expand_tilde)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.clone());

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        success(format!("Database:    {}", db_path.display()));

        Ok(db_path)
    }
}
