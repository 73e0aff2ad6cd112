//! Render Context - resolver에 전달되는 호출자 컨텍스트
//!
//! 코어는 컨텍스트 내부를 절대 해석하지 않고 resolver에 그대로 전달만 합니다.
//! 호출자가 임의 타입(예: 접속 중인 유저)을 담고, resolver가 다운캐스트로
//! 꺼내 씁니다.

use std::any::Any;
use std::sync::Arc;

/// 렌더링 컨텍스트 - 호출자가 공급하는 불투명 값
#[derive(Clone)]
pub struct RenderContext {
    /// 호출자 페이로드 (코어는 내용을 모름)
    payload: Arc<dyn Any + Send + Sync>,
}

impl RenderContext {
    /// 페이로드를 담은 컨텍스트 생성
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Self {
            payload: Arc::new(payload),
        }
    }

    /// 페이로드 없는 컨텍스트 생성
    pub fn empty() -> Self {
        Self::new(())
    }

    /// 타입이 일치하면 페이로드 참조 반환
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext").finish_non_exhaustive()
    }
}
