//! 초성/조합 중 입력을 고려한 한글 검색 매칭
//!
//! 검색창에서 한 글자씩 입력할 때 IME는 다음 음절의 초성이 될 자음을
//! 직전 음절의 종성으로 먼저 붙여 보여준다 ("오윤"을 치는 도중 "옹").
//! 이 모듈은 그런 중간 상태의 검색어로도 원래 의도한 대상을 찾는다.
//!
//! 매칭 규칙:
//! - 검색어와 대상 모두 [`normalize_search_text`]로 정규화 후 비교
//! - 낱자음은 같은 초성을 가진 음절과 일치 (`ㅇ` ~ `윤`)
//! - 종성 없는 음절은 초성/중성이 같은 음절과 일치 (`유` ~ `윤`)
//! - 마지막 음절에 종성이 있으면 그 종성을 떼어 다음 초성으로 옮긴
//!   보정 검색어도 함께 시도 (`옹` -> `오ㅇ`)

use log::{debug, trace};

use super::normalize::normalize_search_text;
use crate::config::SearchConfig;
use crate::core::unicode::{
    choseong_to_jamo_char, is_compat_consonant, jongseong_to_choseong, split_jongseong, Syllable,
};

/// 대상 문자열이 검색어와 일치하는지 검사 (기본 설정)
///
/// 빈 검색어는 모든 대상과 일치한다.
pub fn matches_search_text(source: &str, query: &str) -> bool {
    matches_with(&SearchConfig::default(), source, query)
}

/// 여러 필드 중 하나라도 검색어와 일치하는지 검사 (기본 설정)
pub fn matches_any_search<I, S>(query: &str, sources: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sources
        .into_iter()
        .any(|source| matches_search_text(source.as_ref(), query))
}

/// 검색어의 마지막 글자가 종성을 가진 완성형 음절인지 검사
///
/// true면 사용자가 아직 다음 음절을 조합하는 중일 수 있다.
/// 마지막 글자만 보며, 낱자모나 한글이 아닌 문자로 끝나면 false.
pub fn has_composed_trailing_consonant_query(query: &str) -> bool {
    normalize_search_text(query)
        .chars()
        .last()
        .and_then(Syllable::from_char)
        .is_some_and(|syllable| syllable.has_jongseong())
}

pub(crate) fn matches_with(config: &SearchConfig, source: &str, query: &str) -> bool {
    let normalized_query = normalize_search_text(query);
    if normalized_query.is_empty() {
        return config.empty_query_matches_all;
    }

    let normalized_source = normalize_search_text(source);
    if normalized_source.is_empty() {
        return false;
    }

    let source_chars: Vec<char> = normalized_source.chars().collect();
    query_candidates(&normalized_query, config.composition_correction)
        .iter()
        .any(|candidate| {
            trace!("검색 후보: {} / 대상: {}", candidate, normalized_source);
            if normalized_source.contains(candidate.as_str()) {
                return true;
            }
            let candidate_chars: Vec<char> = candidate.chars().collect();
            includes_hangul_pattern(&source_chars, &candidate_chars)
        })
}

/// 정규화된 검색어로부터 시도할 검색어 후보 목록 생성
fn query_candidates(normalized_query: &str, correction: bool) -> Vec<String> {
    let mut candidates = vec![normalized_query.to_string()];

    if correction {
        if let Some(corrected) = correct_trailing_consonant(normalized_query) {
            debug!("조합 중 종성 보정: {} -> {}", normalized_query, corrected);
            candidates.push(corrected);
        }
    }

    candidates
}

/// 마지막 음절의 종성을 떼어 낱자음으로 뒤에 붙인 검색어
///
/// 옹 -> 오ㅇ, 닭 -> 달ㄱ (겹받침은 뒤 자음만 이동)
/// 마지막 글자가 종성 있는 완성형 음절이 아니면 None
fn correct_trailing_consonant(query: &str) -> Option<String> {
    let last = query.chars().last()?;
    let syllable = Syllable::from_char(last)?;
    if !syllable.has_jongseong() {
        return None;
    }

    let (block, moved_choseong) = match split_jongseong(syllable.jongseong) {
        Some((remaining, choseong)) => (
            Syllable {
                jongseong: remaining,
                ..syllable
            },
            choseong,
        ),
        None => (
            syllable.without_jongseong(),
            jongseong_to_choseong(syllable.jongseong)?,
        ),
    };

    let prefix = &query[..query.len() - last.len_utf8()];
    let mut corrected = String::with_capacity(query.len() + 3);
    corrected.push_str(prefix);
    corrected.push(block.to_char()?);
    corrected.push(choseong_to_jamo_char(moved_choseong)?);
    Some(corrected)
}

/// 검색어 한 글자가 대상 한 글자와 일치하는지
fn char_matches(query_char: char, target_char: char) -> bool {
    if query_char == target_char {
        return true;
    }

    // 낱자음: 대상 음절의 초성과 비교
    if is_compat_consonant(query_char) {
        return Syllable::from_char(target_char)
            .and_then(|target| choseong_to_jamo_char(target.choseong))
            .is_some_and(|choseong| choseong == query_char);
    }

    let (Some(query), Some(target)) = (
        Syllable::from_char(query_char),
        Syllable::from_char(target_char),
    ) else {
        return false;
    };

    if query.choseong != target.choseong || query.jungseong != target.jungseong {
        return false;
    }

    // 종성 없는 검색 음절은 초성/중성이 같은 모든 음절과 일치 (유 ~ 윤)
    !query.has_jongseong() || query.jongseong == target.jongseong
}

/// 대상 안에 검색어 패턴이 연속으로 나타나는 위치가 있는지
fn includes_hangul_pattern(target: &[char], query: &[char]) -> bool {
    if query.is_empty() || query.len() > target.len() {
        return false;
    }

    target.windows(query.len()).any(|window| {
        window
            .iter()
            .zip(query)
            .all(|(&target_char, &query_char)| char_matches(query_char, target_char))
    })
}
