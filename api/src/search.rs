//! Classification of the free-form explorer search box and the list of
//! recent searches shown as suggestions.

use std::str::FromStr;

use alloy_primitives::Address;
use alloy_primitives::B256;
use serde::Deserialize;
use serde::Serialize;

/// How many recent searches are remembered.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// What a search query refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTarget {
    Block(u64),
    Transaction(B256),
    Address(Address),
    /// An ENS name. Resolution is not supported yet.
    Ens(String),
    Invalid,
}

/// Classifies a query. Returns `None` for blank input.
///
/// All digits is a block number, `0x` plus 64 hex digits a transaction hash
/// and `0x` plus 40 hex digits an address.
pub fn classify(query: &str) -> Option<SearchTarget> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let target = if query.bytes().all(|b| b.is_ascii_digit()) {
        query
            .parse::<u64>()
            .map(SearchTarget::Block)
            .unwrap_or(SearchTarget::Invalid)
    } else if query.starts_with("0x") && query.len() == 66 {
        B256::from_str(query)
            .map(SearchTarget::Transaction)
            .unwrap_or(SearchTarget::Invalid)
    } else if query.starts_with("0x") && query.len() == 42 {
        Address::from_str(query)
            .map(SearchTarget::Address)
            .unwrap_or(SearchTarget::Invalid)
    } else if query.ends_with(".eth") {
        SearchTarget::Ens(query.to_string())
    } else {
        SearchTarget::Invalid
    };
    Some(target)
}

/// Previously submitted queries, most recent first, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearches(Vec<String>);

impl RecentSearches {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Records a query, moving it to the front if it was already present.
    pub fn push(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.0.retain(|q| q != query);
        self.0.insert(0, query.to_string());
        self.0.truncate(MAX_RECENT_SEARCHES);
    }

    /// Recent queries containing `fragment`, ignoring case.
    pub fn matching(&self, fragment: &str) -> Vec<String> {
        let needle = fragment.to_lowercase();
        self.0
            .iter()
            .filter(|q| q.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TX: &str = "0x8e38b4dbf6b11fcc3b9dee84fb7986e29ca0a02cecd8977c161ff7333329681e";
    const ADDR: &str = "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5";

    #[test]
    fn blank_queries_are_ignored() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
    }

    #[test]
    fn digits_are_block_numbers() {
        assert_eq!(classify("12345"), Some(SearchTarget::Block(12345)));
        assert_eq!(classify(" 0 "), Some(SearchTarget::Block(0)));
        // does not fit in a u64
        assert_eq!(
            classify("99999999999999999999999"),
            Some(SearchTarget::Invalid)
        );
    }

    #[test]
    fn hashes_and_addresses_by_length() {
        assert!(matches!(classify(TX), Some(SearchTarget::Transaction(_))));
        assert!(matches!(classify(ADDR), Some(SearchTarget::Address(_))));
        // right length, not hex
        let bogus = format!("0x{}", "z".repeat(40));
        assert_eq!(classify(&bogus), Some(SearchTarget::Invalid));
    }

    #[test]
    fn ens_names_are_detected() {
        assert_eq!(
            classify("vitalik.eth"),
            Some(SearchTarget::Ens("vitalik.eth".to_string()))
        );
    }

    #[test]
    fn anything_else_is_invalid() {
        assert_eq!(classify("hello"), Some(SearchTarget::Invalid));
        assert_eq!(classify("0x1234"), Some(SearchTarget::Invalid));
        assert_eq!(classify("12ab"), Some(SearchTarget::Invalid));
    }

    #[test]
    fn recent_searches_dedupe_and_cap() {
        let mut recent = RecentSearches::new();
        for q in ["1", "2", "3", "4", "5", "6"] {
            recent.push(q);
        }
        assert_eq!(recent.len(), MAX_RECENT_SEARCHES);
        assert_eq!(recent.iter().next().map(String::as_str), Some("6"));

        recent.push("4");
        let order: Vec<&str> = recent.iter().map(String::as_str).collect();
        assert_eq!(order, vec!["4", "6", "5", "3", "2"]);

        recent.push("  ");
        assert_eq!(recent.len(), MAX_RECENT_SEARCHES);
    }

    #[test]
    fn recent_searches_match_case_insensitively() {
        let mut recent = RecentSearches::new();
        recent.push(ADDR);
        recent.push("12345");
        assert_eq!(recent.matching("0X9522"), vec![ADDR.to_string()]);
        assert_eq!(recent.matching("234"), vec!["12345".to_string()]);
        assert!(recent.matching("nope").is_empty());
    }
}
