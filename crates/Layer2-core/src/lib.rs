//! weave-core: Core Runtime for TokenWeave
//!
//! Layer2 - 플레이스홀더/확장 구현 레이어
//!
//! # 주요 모듈
//!
//! - `placeholder`: 플레이스홀더 레지스트리 + 텍스트 치환 엔진
//! - `extension`: 확장 모듈 계약 (카테고리 태그 + 라이프사이클 + 호스트)
//!
//! # 사용 예시
//!
//! ```ignore
//! use weave_core::{PlaceholderRegistry, TranslationEngine, RenderContext};
//!
//! // 레지스트리와 엔진은 명시적으로 생성해서 주입 (전역 상태 없음)
//! let registry = Arc::new(PlaceholderRegistry::new());
//! registry.register_fn("%name%", |ctx| { ... }).await;
//!
//! let engine = TranslationEngine::new(Arc::clone(&registry));
//! let rendered = engine.translate(&ctx, "Welcome, %name%!").await?;
//!
//! // 확장 모듈 부착
//! let host = ExtensionHost::new(registry, data_dir);
//! host.attach(ExtensionCategory::AddOn, "economy.addon", addon).await?;
//! ```

// Core modules
pub mod extension;
pub mod placeholder;

// Re-exports: Placeholder
pub use placeholder::{
    FnResolver,
    // Registry
    PlaceholderRegistry,
    // Resolver trait
    PlaceholderResolver,
    // Context
    RenderContext,
    // Engine
    TranslationEngine,
};

// Re-exports: Extension
pub use extension::{
    // Category
    ExtensionCategory,
    // Host
    ExtensionHost,
    // Trait
    ExtensionModule,
    HostContext,
    HostSummary,
    // Lifecycle
    ModuleHandle,
    ModuleId,
    ModuleState,
};

// Layer1 re-exports
pub use weave_foundation::{Error, Result, WeaveConfig};

/// Layer2 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
