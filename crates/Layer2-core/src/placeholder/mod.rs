//! # Placeholder System
//!
//! 플러그인들이 공유하는 플레이스홀더 등록 + 텍스트 치환 엔진
//!
//! ## 개요
//!
//! 독립적인 컴포넌트들이 이름 있는 토큰("플레이스홀더")을 등록하고,
//! 렌더링 시점에 호출자 컨텍스트로부터 값을 계산해 텍스트에 치환합니다:
//! - `PlaceholderRegistry`: 키 -> resolver 매핑 (last-writer-wins)
//! - `TranslationEngine`: 스냅샷 순회로 flat literal 치환
//! - `RenderContext`: 코어가 해석하지 않는 불투명 호출자 값
//!
//! ## 예시
//!
//! ```ignore
//! let registry = Arc::new(PlaceholderRegistry::new());
//! registry.register_fn("%name%", |ctx| {
//!     Ok(ctx.payload::<User>().map(|u| u.name.clone()).unwrap_or_default())
//! }).await;
//!
//! let engine = TranslationEngine::new(Arc::clone(&registry));
//! let text = engine.translate(&ctx, "Welcome, %name%!").await?;
//! ```

mod context;
mod engine;
mod registry;
mod resolver;

pub use context::RenderContext;
pub use engine::TranslationEngine;
pub use registry::PlaceholderRegistry;
pub use resolver::{FnResolver, PlaceholderResolver};
