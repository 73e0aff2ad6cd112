//! Weave Config - 통합 설정
//!
//! 호스트 동작에 대한 설정을 TOML 파일로 관리

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 설정 파일명
pub const WEAVE_CONFIG_FILE: &str = "weave.toml";

// ============================================================================
// Weave Config
// ============================================================================

/// TokenWeave 통합 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaveConfig {
    /// 모듈 unload 실패 시 계속 진행 여부
    #[serde(default = "default_continue_on_error")]
    pub continue_on_error: bool,

    /// 자동 생성 모듈 ID의 네임스페이스 접두어
    #[serde(default = "default_id_namespace")]
    pub id_namespace: String,

    /// 확장 모듈 루트 디렉토리 (카테고리별 하위 디렉토리)
    #[serde(default = "default_extension_root")]
    pub extension_root: PathBuf,
}

fn default_continue_on_error() -> bool {
    true
}

fn default_id_namespace() -> String {
    "weave".to_string()
}

fn default_extension_root() -> PathBuf {
    PathBuf::from("extensions")
}

impl Default for WeaveConfig {
    fn default() -> Self {
        Self {
            continue_on_error: default_continue_on_error(),
            id_namespace: default_id_namespace(),
            extension_root: default_extension_root(),
        }
    }
}

impl WeaveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// TOML 파일에서 설정 로드
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: WeaveConfig = toml::from_str(&content)?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// 설정을 TOML 파일로 저장
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }
}
