//! 설정을 반영한 목록 검색

use super::matcher::{has_composed_trailing_consonant_query, matches_with};
use crate::config::SearchConfig;

/// 설정값을 들고 다니는 검색기
///
/// 작가/작품 목록처럼 여러 필드를 가진 항목들을 검색어로 걸러낼 때 사용한다.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 대상 문자열이 검색어와 일치하는지
    pub fn matches(&self, source: &str, query: &str) -> bool {
        matches_with(&self.config, source, query)
    }

    /// 여러 필드 중 하나라도 일치하는지
    pub fn matches_any<I, S>(&self, query: &str, sources: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        sources
            .into_iter()
            .any(|source| self.matches(source.as_ref(), query))
    }

    /// 사용자가 아직 음절을 조합 중일 수 있는지 (입력창 힌트 표시용)
    pub fn is_composing(&self, query: &str) -> bool {
        has_composed_trailing_consonant_query(query)
    }

    /// 항목 목록에서 필드 중 하나라도 검색어와 일치하는 항목을 순서대로 반환
    ///
    /// - 검색어(공백 제외)가 `min_query_chars`보다 짧으면 빈 결과
    /// - `result_limit`이 0이 아니면 그 개수까지만 반환
    pub fn filter<'a, T, F, I, S>(&self, query: &str, items: &'a [T], fields: F) -> Vec<&'a T>
    where
        F: Fn(&'a T) -> I,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let query_chars = query.chars().filter(|c| !c.is_whitespace()).count();
        if query_chars < self.config.min_query_chars {
            log::debug!(
                "검색어가 너무 짧음: {}자 < {}자",
                query_chars,
                self.config.min_query_chars
            );
            return Vec::new();
        }

        let limit = match self.config.result_limit {
            0 => usize::MAX,
            n => n,
        };

        items
            .iter()
            .filter(|item| self.matches_any(query, fields(*item)))
            .take(limit)
            .collect()
    }
}
