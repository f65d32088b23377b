//! 한글 검색어 매칭
//!
//! 검색창에 입력 중인 (조합이 끝나지 않았을 수 있는) 검색어로
//! 작가명/작품명 같은 대상 문자열을 찾는다.

mod lookup;
mod matcher;
mod normalize;

pub use lookup::Searcher;
pub use matcher::{has_composed_trailing_consonant_query, matches_any_search, matches_search_text};
pub use normalize::{has_hangul_jamo, normalize_search_text};
