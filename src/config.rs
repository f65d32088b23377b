//! 검색 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_PATH_ENV: &str = "JAMO_SEARCH_CONFIG";

/// 설정 파일 저장/로드 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 실패: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 직렬화 실패: {0}")]
    Json(#[from] serde_json::Error),
}

/// 검색 동작 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// 빈 검색어가 모든 대상과 일치하는지 (false면 아무것도 일치하지 않음)
    #[serde(default = "default_empty_query_matches_all")]
    pub empty_query_matches_all: bool,
    /// 조합 중 종성 보정 사용 여부 (옹 -> 오ㅇ)
    #[serde(default = "default_composition_correction")]
    pub composition_correction: bool,
    /// 목록 검색 시 최소 검색어 길이 (공백 제외 글자 수, 0 = 제한 없음)
    #[serde(default)]
    pub min_query_chars: usize,
    /// 목록 검색 결과 최대 개수 (0 = 제한 없음)
    #[serde(default)]
    pub result_limit: usize,
}

fn default_empty_query_matches_all() -> bool {
    true
}

fn default_composition_correction() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            empty_query_matches_all: default_empty_query_matches_all(),
            composition_correction: default_composition_correction(),
            min_query_chars: 0,
            result_limit: 0,
        }
    }
}

/// 설정 파일 경로
///
/// `JAMO_SEARCH_CONFIG`가 있으면 그 경로, 없으면 ~/.config/jamo-search/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("jamo-search").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> SearchConfig {
    load_config_from(&config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> SearchConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            SearchConfig::default()
        }),
        Err(_) => SearchConfig::default(),
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &SearchConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}

/// 설정 파일 저장
pub fn save_config_to(path: &Path, config: &SearchConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
