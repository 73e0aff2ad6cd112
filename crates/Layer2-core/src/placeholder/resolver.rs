//! Placeholder Resolver - 플레이스홀더 값 계산 인터페이스
//!
//! 실패를 암묵적 panic이 아닌 타입 있는 `Result`로 드러내기 위해
//! bare closure 대신 트레이트로 모델링합니다.

use super::context::RenderContext;
use async_trait::async_trait;
use weave_foundation::Result;

/// Resolver 트레이트
///
/// 등록된 플레이스홀더 하나의 값을 주어진 컨텍스트에 대해 계산합니다.
/// 상태를 가지거나 캐싱해도 무방하며, 코어는 호출 횟수에 대해 어떤 약속도
/// 하지 않습니다 (번역 한 번에 등록 키마다 정확히 한 번 호출됨).
#[async_trait]
pub trait PlaceholderResolver: Send + Sync {
    /// 컨텍스트에 대한 플레이스홀더 값 계산
    async fn resolve(&self, ctx: &RenderContext) -> Result<String>;
}

// ============================================================================
// FnResolver - 클로저를 Resolver로 감싸는 어댑터
// ============================================================================

/// 함수값 resolver 어댑터
///
/// 트레이트 구현 없이 함수값을 그대로 등록하고 싶은 등록자를 위한
/// 편의 타입입니다.
pub struct FnResolver<F>
where
    F: Fn(&RenderContext) -> Result<String> + Send + Sync,
{
    func: F,
}

impl<F> FnResolver<F>
where
    F: Fn(&RenderContext) -> Result<String> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F> PlaceholderResolver for FnResolver<F>
where
    F: Fn(&RenderContext) -> Result<String> + Send + Sync,
{
    async fn resolve(&self, ctx: &RenderContext) -> Result<String> {
        (self.func)(ctx)
    }
}
