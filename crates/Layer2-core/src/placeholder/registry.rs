//! Placeholder Registry - 플레이스홀더 저장소
//!
//! 여러 등록자가 프로세스 수명 동안 공유하는 단일 가변 자원.
//! Interior Mutability 패턴으로 thread-safe한 동시 등록을 지원합니다.

use super::context::RenderContext;
use super::resolver::{FnResolver, PlaceholderResolver};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use weave_foundation::Result;

/// 등록된 플레이스홀더 항목
struct RegisteredPlaceholder {
    /// Resolver 인스턴스
    resolver: Arc<dyn PlaceholderResolver>,

    /// 등록 순서 (스냅샷 순회 순서를 고정)
    order: usize,
}

/// 플레이스홀더 레지스트리 - 키와 resolver의 매핑 관리
///
/// 키 형식은 검증하지 않습니다. `%…%` 구분자는 관례일 뿐이며, 번역 시
/// 키를 literal 부분 문자열로 취급합니다. 같은 키의 재등록은 에러가 아니라
/// 의도된 덮어쓰기(last-writer-wins)입니다. 등록 해제는 없습니다.
pub struct PlaceholderRegistry {
    /// 항목 저장소 (key -> RegisteredPlaceholder)
    entries: RwLock<HashMap<String, RegisteredPlaceholder>>,

    /// 등록 카운터
    order_counter: RwLock<usize>,
}

impl PlaceholderRegistry {
    /// 새 레지스트리 생성
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            order_counter: RwLock::new(0),
        }
    }

    // ========================================================================
    // 등록
    // ========================================================================

    /// 플레이스홀더 등록
    ///
    /// 이미 있는 키면 resolver만 교체되고 등록 순서 슬롯은 유지됩니다.
    pub async fn register(&self, key: impl Into<String>, resolver: Arc<dyn PlaceholderResolver>) {
        let key = key.into();
        let mut entries = self.entries.write().await;

        if let Some(existing) = entries.get_mut(&key) {
            warn!("Placeholder '{}' re-registered, overriding resolver", key);
            existing.resolver = resolver;
            return;
        }

        let mut counter = self.order_counter.write().await;
        *counter += 1;
        let order = *counter;

        entries.insert(key.clone(), RegisteredPlaceholder { resolver, order });
        debug!("Registered placeholder: {} (order {})", key, order);
    }

    /// 클로저로 플레이스홀더 등록
    pub async fn register_fn<F>(&self, key: impl Into<String>, func: F)
    where
        F: Fn(&RenderContext) -> Result<String> + Send + Sync + 'static,
    {
        self.register(key, Arc::new(FnResolver::new(func))).await;
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 번역 한 번에 쓸 스냅샷 (등록 순서대로)
    ///
    /// 반환된 Vec은 내부 맵에서 분리되어 있어, 진행 중인 순회가 동시 등록에
    /// 의해 변경되지 않습니다.
    pub async fn snapshot(&self) -> Vec<(String, Arc<dyn PlaceholderResolver>)> {
        let entries = self.entries.read().await;
        let mut ordered: Vec<_> = entries.iter().collect();
        ordered.sort_by_key(|(_, entry)| entry.order);
        ordered
            .into_iter()
            .map(|(key, entry)| (key.clone(), Arc::clone(&entry.resolver)))
            .collect()
    }

    /// 키 존재 여부 확인
    pub async fn contains(&self, key: &str) -> bool {
        let entries = self.entries.read().await;
        entries.contains_key(key)
    }

    /// 등록된 키 목록 (등록 순서대로)
    pub async fn keys(&self) -> Vec<String> {
        self.snapshot().await.into_iter().map(|(k, _)| k).collect()
    }

    /// 등록된 플레이스홀더 수
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    /// 비어있는지 확인
    pub async fn is_empty(&self) -> bool {
        let entries = self.entries.read().await;
        entries.is_empty()
    }
}

impl Default for PlaceholderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_and_contains() {
        let registry = PlaceholderRegistry::new();
        registry
            .register_fn("%name%", |_| Ok("Alice".to_string()))
            .await;

        assert!(registry.contains("%name%").await);
        assert!(!registry.contains("%rank%").await);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_override_keeps_order_slot() {
        let registry = PlaceholderRegistry::new();
        registry.register_fn("%a%", |_| Ok("1".to_string())).await;
        registry.register_fn("%b%", |_| Ok("2".to_string())).await;

        // %a% 재등록 - 슬롯은 그대로 첫 번째
        registry.register_fn("%a%", |_| Ok("override".to_string())).await;

        assert_eq!(registry.keys().await, vec!["%a%", "%b%"]);
        assert_eq!(registry.len().await, 2);

        let snapshot = registry.snapshot().await;
        let value = snapshot[0].1.resolve(&RenderContext::empty()).await.unwrap();
        assert_eq!(value, "override");
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let registry = PlaceholderRegistry::new();
        registry.register_fn("%a%", |_| Ok("1".to_string())).await;

        let snapshot = registry.snapshot().await;
        registry.register_fn("%b%", |_| Ok("2".to_string())).await;

        // 이미 뜬 스냅샷은 이후 등록의 영향을 받지 않음
        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let registry = PlaceholderRegistry::new();
        assert!(registry.is_empty().await);
        assert!(registry.snapshot().await.is_empty());
    }
}
