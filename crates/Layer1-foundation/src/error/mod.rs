//! Error types for TokenWeave
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// TokenWeave 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // Placeholder 관련
    // ========================================================================
    #[error("Resolver failed: {key} - {message}")]
    Resolver { key: String, message: String },

    // ========================================================================
    // Extension 관련
    // ========================================================================
    #[error("Invalid lifecycle transition: {module} - {message}")]
    Lifecycle { module: String, message: String },

    #[error("Extension error: {0}")]
    Extension(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::InvalidInput(_) | Error::Resolver { .. }
        )
    }

    /// Resolver 에러 생성 헬퍼
    pub fn resolver(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Resolver {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Lifecycle 에러 생성 헬퍼
    pub fn lifecycle(module: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Lifecycle {
            module: module.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}
