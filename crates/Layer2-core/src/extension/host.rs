//! Extension Host - 모듈 부착/탈착 관리
//!
//! 생성 -> 식별자 할당 -> 로드, 종료 시 언로드를 수행하는 드라이버.
//! 모듈 발견/로딩 자체는 이 코어의 범위 밖이며, 이미 생성된 모듈
//! 인스턴스를 받아 수명만 관리합니다.

use super::category::ExtensionCategory;
use super::lifecycle::{ModuleHandle, ModuleState};
use super::traits::{ExtensionModule, HostContext};
use crate::placeholder::PlaceholderRegistry;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use uuid::Uuid;
use weave_foundation::{Error, Result, WeaveConfig};

/// 확장 호스트 - 전체 모듈 수명 관리
pub struct ExtensionHost {
    /// 부착된 모듈 핸들 (ID -> ModuleHandle)
    modules: RwLock<HashMap<String, Arc<ModuleHandle>>>,

    /// 모듈에 제공되는 공유 컨텍스트
    context: Arc<HostContext>,

    /// 호스트 설정
    config: WeaveConfig,
}

impl ExtensionHost {
    /// 새 호스트 생성
    pub fn new(placeholders: Arc<PlaceholderRegistry>, data_dir: PathBuf) -> Self {
        Self::with_config(placeholders, data_dir, WeaveConfig::default())
    }

    /// 설정으로 생성
    pub fn with_config(
        placeholders: Arc<PlaceholderRegistry>,
        data_dir: PathBuf,
        config: WeaveConfig,
    ) -> Self {
        Self {
            modules: RwLock::new(HashMap::new()),
            context: Arc::new(HostContext::new(placeholders, data_dir)),
            config,
        }
    }

    // ========================================================================
    // 부착 / 탈착
    // ========================================================================

    /// 모듈 부착: 식별자 할당 후 로드
    ///
    /// `on_load` 실패 시 모듈은 유지되지 않고 에러가 전파됩니다.
    pub async fn attach(
        &self,
        category: ExtensionCategory,
        id: impl Into<String>,
        module: Arc<dyn ExtensionModule>,
    ) -> Result<()> {
        let id = id.into();

        {
            let modules = self.modules.read().await;
            if modules.contains_key(&id) {
                return Err(Error::Extension(format!(
                    "Module {id} is already attached"
                )));
            }
        }

        let handle = Arc::new(ModuleHandle::new(category, module));
        handle.assign_id(&id).await?;

        if let Err(e) = handle.load(&self.context).await {
            error!("Module {} failed to load: {}", id, e);
            return Err(e);
        }

        let mut modules = self.modules.write().await;
        if modules.insert(id.clone(), handle).is_some() {
            // 중복 검사와 로드 사이에 끼어든 동시 attach
            warn!("Module {} was attached concurrently, replacing handle", id);
        }

        info!("Attached module: {} ({})", id, category);
        Ok(())
    }

    /// 자동 생성 식별자로 모듈 부착
    ///
    /// `<네임스페이스>.<카테고리>.<uuid>` 형태의 식별자를 돌려줍니다.
    pub async fn attach_generated(
        &self,
        category: ExtensionCategory,
        module: Arc<dyn ExtensionModule>,
    ) -> Result<String> {
        let id = format!(
            "{}.{}.{}",
            self.config.id_namespace,
            category,
            Uuid::new_v4()
        );
        self.attach(category, &id, module).await?;
        Ok(id)
    }

    /// 모듈 탈착: 언로드 후 핸들 제거
    ///
    /// `on_unload` 실패는 `continue_on_error` 설정이면 로그만 남기고
    /// 계속 진행합니다.
    pub async fn detach(&self, id: &str) -> Result<()> {
        let handle = {
            let modules = self.modules.read().await;
            modules
                .get(id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("Module {id} not found")))?
        };

        if let Err(e) = handle.unload(&self.context).await {
            if self.config.continue_on_error {
                warn!("Module {} on_unload failed: {}. Continuing.", id, e);
            } else {
                return Err(e);
            }
        }

        let mut modules = self.modules.write().await;
        modules.remove(id);

        info!("Detached module: {}", id);
        Ok(())
    }

    /// 부착된 모든 모듈 탈착 (호스트 종료 경로)
    pub async fn detach_all(&self) -> Result<()> {
        let ids: Vec<String> = {
            let modules = self.modules.read().await;
            modules.keys().cloned().collect()
        };

        for id in ids {
            self.detach(&id).await?;
        }
        Ok(())
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 모듈 상태 조회
    pub async fn state_of(&self, id: &str) -> Option<ModuleState> {
        let modules = self.modules.read().await;
        match modules.get(id) {
            Some(handle) => Some(handle.state().await),
            None => None,
        }
    }

    /// 카테고리별 모듈 ID 목록
    pub async fn modules_in(&self, category: ExtensionCategory) -> Vec<String> {
        let modules = self.modules.read().await;
        let mut ids: Vec<String> = modules
            .iter()
            .filter(|(_, handle)| handle.category() == category)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// 부착된 모듈 수
    pub async fn module_count(&self) -> usize {
        let modules = self.modules.read().await;
        modules.len()
    }

    /// 카테고리별 모듈 수 요약
    pub async fn summary(&self) -> HostSummary {
        let modules = self.modules.read().await;
        let mut by_category = HashMap::new();

        for handle in modules.values() {
            *by_category.entry(handle.category()).or_insert(0) += 1;
        }

        HostSummary {
            total: modules.len(),
            by_category,
        }
    }

    /// 공유 컨텍스트 접근
    pub fn context(&self) -> &Arc<HostContext> {
        &self.context
    }
}

/// 호스트 요약 정보
#[derive(Debug, Clone)]
pub struct HostSummary {
    pub total: usize,
    pub by_category: HashMap<ExtensionCategory, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::traits::ModuleId;
    use std::any::Any;

    struct GreetingModule {
        id: ModuleId,
    }

    impl GreetingModule {
        fn new() -> Arc<Self> {
            Arc::new(Self { id: ModuleId::new() })
        }
    }

    #[async_trait::async_trait]
    impl ExtensionModule for GreetingModule {
        fn set_id(&self, id: &str) {
            self.id.assign(id);
        }

        fn id(&self) -> Option<String> {
            self.id.get()
        }

        async fn on_load(&self, ctx: &HostContext) -> Result<()> {
            ctx.placeholders()
                .register_fn("%greeting%", |_| Ok("Hello".to_string()))
                .await;
            Ok(())
        }

        async fn on_unload(&self, _ctx: &HostContext) -> Result<()> {
            Ok(())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn test_host() -> (ExtensionHost, Arc<PlaceholderRegistry>) {
        let registry = Arc::new(PlaceholderRegistry::new());
        let host = ExtensionHost::new(Arc::clone(&registry), PathBuf::from("/tmp"));
        (host, registry)
    }

    #[tokio::test]
    async fn test_attach_runs_on_load() {
        let (host, registry) = test_host();

        host.attach(ExtensionCategory::AddOn, "weave.greeting", GreetingModule::new())
            .await
            .unwrap();

        assert!(registry.contains("%greeting%").await);
        assert_eq!(
            host.state_of("weave.greeting").await,
            Some(ModuleState::Active)
        );
    }

    #[tokio::test]
    async fn test_duplicate_attach_fails() {
        let (host, _) = test_host();

        host.attach(ExtensionCategory::AddOn, "weave.dup", GreetingModule::new())
            .await
            .unwrap();

        let err = host
            .attach(ExtensionCategory::AddOn, "weave.dup", GreetingModule::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Extension(_)));
        assert_eq!(host.module_count().await, 1);
    }

    #[tokio::test]
    async fn test_detach_unknown_fails() {
        let (host, _) = test_host();
        let err = host.detach("weave.ghost").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_attach_detach_cycle() {
        let (host, _) = test_host();

        host.attach(ExtensionCategory::Agent, "weave.cycle", GreetingModule::new())
            .await
            .unwrap();
        host.detach("weave.cycle").await.unwrap();

        assert_eq!(host.module_count().await, 0);
        assert_eq!(host.state_of("weave.cycle").await, None);
    }

    #[tokio::test]
    async fn test_detach_all() {
        let (host, _) = test_host();

        host.attach(ExtensionCategory::AddOn, "a", GreetingModule::new())
            .await
            .unwrap();
        host.attach(ExtensionCategory::Agent, "b", GreetingModule::new())
            .await
            .unwrap();

        host.detach_all().await.unwrap();
        assert_eq!(host.module_count().await, 0);
    }

    #[tokio::test]
    async fn test_attach_generated_id() {
        let (host, _) = test_host();

        let id = host
            .attach_generated(ExtensionCategory::Dlc, GreetingModule::new())
            .await
            .unwrap();

        assert!(id.starts_with("weave.dlc."));
        assert_eq!(host.state_of(&id).await, Some(ModuleState::Active));
    }

    #[tokio::test]
    async fn test_summary_by_category() {
        let (host, _) = test_host();

        host.attach(ExtensionCategory::AddOn, "a1", GreetingModule::new())
            .await
            .unwrap();
        host.attach(ExtensionCategory::AddOn, "a2", GreetingModule::new())
            .await
            .unwrap();
        host.attach(ExtensionCategory::Skript, "s1", GreetingModule::new())
            .await
            .unwrap();

        let summary = host.summary().await;
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_category[&ExtensionCategory::AddOn], 2);
        assert_eq!(summary.by_category[&ExtensionCategory::Skript], 1);

        assert_eq!(host.modules_in(ExtensionCategory::AddOn).await, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn test_unload_error_tolerated_by_default() {
        struct StubbornModule {
            id: ModuleId,
        }

        #[async_trait::async_trait]
        impl ExtensionModule for StubbornModule {
            fn set_id(&self, id: &str) {
                self.id.assign(id);
            }

            fn id(&self) -> Option<String> {
                self.id.get()
            }

            async fn on_load(&self, _ctx: &HostContext) -> Result<()> {
                Ok(())
            }

            async fn on_unload(&self, _ctx: &HostContext) -> Result<()> {
                Err(Error::Extension("refusing to go".to_string()))
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        let (host, _) = test_host();
        host.attach(
            ExtensionCategory::Library,
            "weave.stubborn",
            Arc::new(StubbornModule { id: ModuleId::new() }),
        )
        .await
        .unwrap();

        // 기본 설정은 continue_on_error = true
        host.detach("weave.stubborn").await.unwrap();
        assert_eq!(host.module_count().await, 0);
    }

    #[tokio::test]
    async fn test_unload_error_propagates_when_strict() {
        struct StubbornModule {
            id: ModuleId,
        }

        #[async_trait::async_trait]
        impl ExtensionModule for StubbornModule {
            fn set_id(&self, id: &str) {
                self.id.assign(id);
            }

            fn id(&self) -> Option<String> {
                self.id.get()
            }

            async fn on_load(&self, _ctx: &HostContext) -> Result<()> {
                Ok(())
            }

            async fn on_unload(&self, _ctx: &HostContext) -> Result<()> {
                Err(Error::Extension("refusing to go".to_string()))
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        let registry = Arc::new(PlaceholderRegistry::new());
        let mut config = WeaveConfig::default();
        config.continue_on_error = false;

        let host = ExtensionHost::with_config(registry, PathBuf::from("/tmp"), config);
        host.attach(
            ExtensionCategory::Library,
            "weave.strict",
            Arc::new(StubbornModule { id: ModuleId::new() }),
        )
        .await
        .unwrap();

        assert!(host.detach("weave.strict").await.is_err());
        // 모듈은 여전히 부착되어 있음
        assert_eq!(host.module_count().await, 1);
    }
}
