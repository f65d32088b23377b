pub mod config;
pub mod contact;
pub mod core;
pub mod search;

pub use config::{load_config, SearchConfig};
pub use contact::{format_korean_phone_number, parse_contact, ParsedContact};
pub use search::{
    has_composed_trailing_consonant_query, has_hangul_jamo, matches_any_search,
    matches_search_text, normalize_search_text, Searcher,
};
