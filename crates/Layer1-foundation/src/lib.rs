//! # weave-foundation
//!
//! Foundation layer for TokenWeave:
//! - Error: 중앙 에러 타입 (`Error`, `Result`)
//! - Config: 통합 설정 (`WeaveConfig`, TOML 로드/저장)
//!
//! 상위 레이어(`weave-core`)는 이 크레이트의 `Result`를 사용해
//! 모든 실패를 호출자에게 동기적으로 전파합니다.

pub mod config;
pub mod error;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config
// ============================================================================
pub use config::{WeaveConfig, WEAVE_CONFIG_FILE};

/// Layer1 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
