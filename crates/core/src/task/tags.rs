//! Tag normalization

/// Normalize a raw tag list: trim whitespace, lower-case, drop entries that
/// are blank after trimming, and collapse duplicates to the first occurrence.
///
/// Callers must not rely on the output order beyond set equality.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || normalized.contains(&tag) {
            continue;
        }
        normalized.push(tag);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_trims_lowercases_and_deduplicates() {
        let tags = raw(&["  BUG  ", "Bug", "FRONTEND", "frontend", "  ", ""]);
        let mut normalized = normalize_tags(&tags);
        normalized.sort();
        assert_eq!(normalized, vec!["bug".to_string(), "frontend".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_tags(&[]).is_empty());
    }

    #[test]
    fn test_blank_only_input() {
        let tags = raw(&["", "   ", "\t"]);
        assert!(normalize_tags(&tags).is_empty());
    }

    #[test]
    fn test_already_normalized_input_is_unchanged() {
        let tags = raw(&["backend", "api"]);
        assert_eq!(normalize_tags(&tags), tags);
    }
}
