//! Module Lifecycle - 모듈 상태 머신
//!
//! 잘못된 순서의 전이는 `Error::Lifecycle`로 명시적으로 거부합니다:
//! `Constructed -> Identified (assign_id) -> Active (load) -> Inactive (unload)`

use super::category::ExtensionCategory;
use super::traits::{ExtensionModule, HostContext};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use weave_foundation::{Error, Result};

/// 모듈 인스턴스 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// 생성됨 (아직 식별자 없음)
    Constructed,

    /// 식별자 할당됨
    Identified,

    /// 활성화됨
    Active,

    /// 비활성화됨
    Inactive,
}

impl std::fmt::Display for ModuleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constructed => write!(f, "constructed"),
            Self::Identified => write!(f, "identified"),
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// 모듈 핸들 - 모듈 하나의 라이프사이클 전이를 강제
///
/// 라이프사이클 호출은 모듈당 하나의 조정 스레드에서 온다고 가정하며
/// (호스트 책임), 같은 모듈에 대한 동시 호출 재진입은 보장하지 않습니다.
pub struct ModuleHandle {
    /// 모듈 인스턴스
    module: Arc<dyn ExtensionModule>,

    /// 분류 태그
    category: ExtensionCategory,

    /// 현재 상태
    state: RwLock<ModuleState>,

    /// 할당된 식별자
    id: RwLock<Option<String>>,
}

impl ModuleHandle {
    /// 새 핸들 생성
    pub fn new(category: ExtensionCategory, module: Arc<dyn ExtensionModule>) -> Self {
        Self {
            module,
            category,
            state: RwLock::new(ModuleState::Constructed),
            id: RwLock::new(None),
        }
    }

    // ========================================================================
    // 전이
    // ========================================================================

    /// 식별자 할당 (Constructed -> Identified)
    ///
    /// 두 번째 호출은 거부됩니다. 모듈의 `set_id`로 전달한 뒤 상태를
    /// 전이합니다.
    pub async fn assign_id(&self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        let mut state = self.state.write().await;

        if *state != ModuleState::Constructed {
            return Err(Error::lifecycle(
                &id,
                format!("assign_id called in state '{state}', expected 'constructed'"),
            ));
        }

        self.module.set_id(&id);
        *self.id.write().await = Some(id.clone());
        *state = ModuleState::Identified;

        debug!("Module {} identified ({})", id, self.category);
        Ok(())
    }

    /// 모듈 로드 (Identified -> Active)
    ///
    /// `on_load` 실패 시 상태는 Identified로 남고 에러가 전파됩니다.
    pub async fn load(&self, ctx: &HostContext) -> Result<()> {
        let mut state = self.state.write().await;
        let name = self.display_id().await;

        if *state != ModuleState::Identified {
            return Err(Error::lifecycle(
                &name,
                format!("load called in state '{state}', expected 'identified'"),
            ));
        }

        self.module.on_load(ctx).await?;
        *state = ModuleState::Active;

        info!("Module {} loaded ({})", name, self.category);
        Ok(())
    }

    /// 모듈 언로드 (Active -> Inactive)
    pub async fn unload(&self, ctx: &HostContext) -> Result<()> {
        let mut state = self.state.write().await;
        let name = self.display_id().await;

        if *state != ModuleState::Active {
            return Err(Error::lifecycle(
                &name,
                format!("unload called in state '{state}', expected 'active'"),
            ));
        }

        self.module.on_unload(ctx).await?;
        *state = ModuleState::Inactive;

        info!("Module {} unloaded ({})", name, self.category);
        Ok(())
    }

    // ========================================================================
    // 접근자
    // ========================================================================

    /// 현재 상태
    pub async fn state(&self) -> ModuleState {
        *self.state.read().await
    }

    /// 할당된 식별자
    pub async fn id(&self) -> Option<String> {
        self.id.read().await.clone()
    }

    /// 분류 태그
    pub fn category(&self) -> ExtensionCategory {
        self.category
    }

    /// 모듈 인스턴스 접근
    pub fn module(&self) -> &Arc<dyn ExtensionModule> {
        &self.module
    }

    /// 로그/에러 메시지용 식별자
    async fn display_id(&self) -> String {
        self.id
            .read()
            .await
            .clone()
            .unwrap_or_else(|| "<unidentified>".to_string())
    }
}
