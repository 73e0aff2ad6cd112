//! Extension traits - 핵심 확장 모듈 인터페이스

use crate::placeholder::PlaceholderRegistry;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use weave_foundation::Result;

// ============================================================================
// HostContext - 모듈에 제공되는 컨텍스트
// ============================================================================

/// 호스트 컨텍스트 - 모듈이 load/unload 중에 코어와 상호작용하는 인터페이스
pub struct HostContext {
    /// 공유 플레이스홀더 레지스트리
    placeholders: Arc<PlaceholderRegistry>,

    /// 모듈 설정
    config: RwLock<HashMap<String, Value>>,

    /// 데이터 디렉토리
    data_dir: PathBuf,
}

impl HostContext {
    /// 새 컨텍스트 생성
    pub fn new(placeholders: Arc<PlaceholderRegistry>, data_dir: PathBuf) -> Self {
        Self {
            placeholders,
            config: RwLock::new(HashMap::new()),
            data_dir,
        }
    }

    /// 플레이스홀더 레지스트리 접근
    ///
    /// 모듈은 `on_load`에서 여기에 플레이스홀더를 등록합니다. 코어는 자동
    /// 등록 해제를 제공하지 않으므로, 되돌리기는 모듈 책임입니다.
    pub fn placeholders(&self) -> &Arc<PlaceholderRegistry> {
        &self.placeholders
    }

    // ========================================================================
    // 설정
    // ========================================================================

    /// 설정 값 가져오기
    pub async fn get_config(&self, key: &str) -> Option<Value> {
        let config = self.config.read().await;
        config.get(key).cloned()
    }

    /// 설정 값 설정
    pub async fn set_config(&self, key: impl Into<String>, value: Value) {
        let mut config = self.config.write().await;
        config.insert(key.into(), value);
    }

    /// 설정 로드 (외부에서 주입)
    pub async fn load_config(&self, config: HashMap<String, Value>) {
        let mut current = self.config.write().await;
        *current = config;
    }

    /// 모든 설정 반환
    pub async fn all_config(&self) -> HashMap<String, Value> {
        let config = self.config.read().await;
        config.clone()
    }

    // ========================================================================
    // 유틸리티
    // ========================================================================

    /// 데이터 디렉토리
    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }
}

// ============================================================================
// ExtensionModule Trait - 모든 카테고리가 공유하는 단일 계약
// ============================================================================

/// 확장 모듈 트레이트
///
/// 여섯 카테고리(AddOn/Agent/API/DLC/Library/Skript)가 전부 이 하나의
/// 계약으로 수렴합니다. 카테고리는 별도 태그(`ExtensionCategory`)로만
/// 구분되며 동작상 차이는 없습니다.
///
/// `set_id`는 호스트가 `on_load` 전에 정확히 한 번 호출합니다. 타입
/// 수준에서는 재호출을 막지 않으며 (관례로 유지되는 불변식), 단일 할당은
/// 상위의 `ModuleHandle`이 강제합니다.
#[async_trait::async_trait]
pub trait ExtensionModule: Send + Sync {
    /// 호스트가 할당한 식별자 저장
    fn set_id(&self, id: &str);

    /// 할당된 식별자 (할당 전에는 None)
    fn id(&self) -> Option<String>;

    /// 모듈 활성화 시 호출
    ///
    /// 여기서 협력 레지스트리에 자기 등록을 수행합니다
    /// (예: `ctx.placeholders().register_fn(...)`).
    async fn on_load(&self, ctx: &HostContext) -> Result<()>;

    /// 모듈 비활성화 시 호출
    ///
    /// 자원을 해제하고, `on_load`에서 수행한 등록을 되돌려야 합니다.
    async fn on_unload(&self, ctx: &HostContext) -> Result<()>;

    /// 타입 캐스팅을 위한 헬퍼 (다운캐스팅 지원)
    fn as_any(&self) -> &dyn Any;
}

// ============================================================================
// ModuleId - 구현체용 식별자 저장 헬퍼
// ============================================================================

/// 모듈 식별자 저장소
///
/// `set_id`/`id`를 위임 구현할 때 쓰는 헬퍼. 마지막 쓰기가 이깁니다 -
/// 단일 할당 강제는 `ModuleHandle` 몫입니다.
#[derive(Default)]
pub struct ModuleId {
    inner: std::sync::RwLock<Option<String>>,
}

impl ModuleId {
    pub fn new() -> Self {
        Self::default()
    }

    /// 식별자 저장
    pub fn assign(&self, id: &str) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *inner = Some(id.to_string());
    }

    /// 저장된 식별자
    pub fn get(&self) -> Option<String> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.clone()
    }
}
