//! # Extension System
//!
//! TokenWeave 확장 모듈 시스템
//!
//! ## 개요
//!
//! 여섯 카테고리(AddOn/Agent/API/DLC/Library/Skript)의 확장 모듈은 전부
//! 하나의 계약으로 수렴합니다:
//! - `ExtensionModule`: set_id / on_load / on_unload 계약
//! - `ExtensionCategory`: 호스트 라우팅용 분류 태그 (동작 차이 없음)
//! - `ModuleHandle`: 상태 머신 강제 (Constructed -> Identified -> Active -> Inactive)
//! - `ExtensionHost`: 부착/탈착 드라이버
//!
//! ## 예시
//!
//! ```ignore
//! struct EconomyAddOn { id: ModuleId }
//!
//! #[async_trait]
//! impl ExtensionModule for EconomyAddOn {
//!     fn set_id(&self, id: &str) { self.id.assign(id); }
//!     fn id(&self) -> Option<String> { self.id.get() }
//!     async fn on_load(&self, ctx: &HostContext) -> Result<()> {
//!         ctx.placeholders().register_fn("%balance%", |ctx| { ... }).await;
//!         Ok(())
//!     }
//!     async fn on_unload(&self, _ctx: &HostContext) -> Result<()> { Ok(()) }
//!     fn as_any(&self) -> &dyn Any { self }
//! }
//!
//! host.attach(ExtensionCategory::AddOn, "economy.addon", Arc::new(addon)).await?;
//! ```

mod category;
mod host;
mod lifecycle;
mod traits;

pub use category::ExtensionCategory;
pub use host::{ExtensionHost, HostSummary};
pub use lifecycle::{ModuleHandle, ModuleState};
pub use traits::{ExtensionModule, HostContext, ModuleId};
