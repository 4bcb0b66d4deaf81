use crate::app::renderers::OutputFormat;
use crate::utils::error::{ReportError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

/// Optional report settings file. Every key may be overridden on the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub report: ReportSection,
    pub preset: Option<PresetSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
    pub format: Option<OutputFormat>,
    pub amount: Option<usize>,
}

/// Identity of the location preset that produced the input. Echoed, never interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetSection {
    pub title: Option<String>,
    pub checksum: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| ReportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PRESET_CHECKSUM})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn preset_title(&self) -> Option<&str> {
        self.preset.as_ref().and_then(|p| p.title.as_deref())
    }

    pub fn preset_checksum(&self) -> Option<&str> {
        self.preset.as_ref().and_then(|p| p.checksum.as_deref())
    }
}
