use sha2::{Digest, Sha256};

/// Bidirectional substring match on lowercased text: either side may contain
/// the other. Short keywords (and empty input) match broadly.
pub fn loose_match(text: &str, keyword: &str) -> bool {
    let text = text.to_lowercase();
    let keyword = keyword.to_lowercase();
    text.contains(&keyword) || keyword.contains(&text)
}

/// One-way match: `text` contains `keyword`, ignoring case.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Keyword length floor. A floor of 0 admits every keyword.
pub fn passes_floor(keyword: &str, min_len: usize) -> bool {
    min_len == 0 || keyword.chars().count() >= min_len
}

pub fn content_fingerprint(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
