//! Translation Engine - 텍스트 치환 엔진
//!
//! 레지스트리 스냅샷을 한 번 뜨고, 각 항목의 resolver 출력으로 키의 모든
//! literal 출현을 순차 치환합니다. 템플릿 문법(중첩, 이스케이프, 조건)은
//! 파싱하지 않습니다.

use super::context::RenderContext;
use super::registry::PlaceholderRegistry;
use std::sync::Arc;
use tracing::{debug, trace};
use weave_foundation::{Error, Result};

/// 번역 엔진
///
/// 레지스트리를 명시적으로 주입받습니다 (전역 싱글톤 없음).
pub struct TranslationEngine {
    /// 플레이스홀더 레지스트리
    registry: Arc<PlaceholderRegistry>,
}

impl TranslationEngine {
    /// 새 엔진 생성
    pub fn new(registry: Arc<PlaceholderRegistry>) -> Self {
        Self { registry }
    }

    /// 레지스트리 접근
    pub fn registry(&self) -> &Arc<PlaceholderRegistry> {
        &self.registry
    }

    /// 등록된 모든 플레이스홀더를 컨텍스트에 대해 치환
    ///
    /// 키는 등록 순서대로 처리됩니다. resolver는 키가 현재 문자열에
    /// 나타나는지와 무관하게 항목마다 정확히 한 번 호출됩니다.
    /// 앞선 키의 값이 아직 처리 안 된 키의 literal 텍스트를 담고 있으면
    /// 그 텍스트도 이후 반복에서 치환됩니다. 이미 처리된 키는 다시
    /// 방문하지 않습니다.
    ///
    /// resolver 하나라도 실패하면 전체 호출이 `Error::Resolver`로 실패하며
    /// 부분 결과는 반환하지 않습니다. resolver에 타임아웃은 걸지 않습니다.
    pub async fn translate(&self, ctx: &RenderContext, text: &str) -> Result<String> {
        let entries = self.registry.snapshot().await;
        let mut result = text.to_string();

        for (key, resolver) in entries {
            let value = resolver
                .resolve(ctx)
                .await
                .map_err(|e| Error::resolver(&key, e.to_string()))?;

            trace!("Substituting {} -> {}", key, value);
            result = result.replace(&key, &value);
        }

        debug!("Translated {} chars -> {} chars", text.len(), result.len());
        Ok(result)
    }
}
