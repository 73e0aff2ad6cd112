//! Extension Category - 확장 모듈 분류 태그
//!
//! 여섯 카테고리는 이름만 다를 뿐 동일한 계약(`ExtensionModule`)을
//! 공유합니다. 카테고리는 호스트의 디스커버리 라우팅(카테고리별 디렉토리,
//! 별도 탐색 패스)에만 쓰이는 순수 분류 라벨입니다.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use weave_foundation::Error;

/// 확장 모듈 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionCategory {
    /// 독립 기능 추가 모듈
    AddOn,

    /// 자동화 에이전트 모듈
    Agent,

    /// 외부 연동 API 모듈
    Api,

    /// 콘텐츠 확장 모듈
    Dlc,

    /// 공용 라이브러리 모듈
    Library,

    /// 스크립트 연동 모듈
    Skript,
}

impl ExtensionCategory {
    /// 전체 카테고리 목록 (디스커버리 패스 순서)
    pub const ALL: [ExtensionCategory; 6] = [
        ExtensionCategory::AddOn,
        ExtensionCategory::Agent,
        ExtensionCategory::Api,
        ExtensionCategory::Dlc,
        ExtensionCategory::Library,
        ExtensionCategory::Skript,
    ];

    /// 카테고리 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddOn => "addon",
            Self::Agent => "agent",
            Self::Api => "api",
            Self::Dlc => "dlc",
            Self::Library => "library",
            Self::Skript => "skript",
        }
    }

    /// 카테고리별 디스커버리 디렉토리 이름
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::AddOn => "addons",
            Self::Agent => "agents",
            Self::Api => "apis",
            Self::Dlc => "dlcs",
            Self::Library => "libraries",
            Self::Skript => "skripts",
        }
    }
}

impl std::fmt::Display for ExtensionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExtensionCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "addon" => Ok(Self::AddOn),
            "agent" => Ok(Self::Agent),
            "api" => Ok(Self::Api),
            "dlc" => Ok(Self::Dlc),
            "library" => Ok(Self::Library),
            "skript" => Ok(Self::Skript),
            other => Err(Error::InvalidInput(format!(
                "Unknown extension category: {other}"
            ))),
        }
    }
}
