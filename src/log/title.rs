//! Title decomposition into named fields.

use std::collections::BTreeMap;

use regex_lite::Regex;

/// Split a commit title into named fields.
///
/// When `pattern` is absent or does not match, the result is
/// `{ "title": title }`. On a match, `meaning[i]` is bound to capture
/// group `i + 1`; groups without a name and names without a participating
/// group are skipped. No `title` key is added in the matching case unless
/// `meaning` names one.
pub fn decompose_title(
    title: &str,
    pattern: Option<&Regex>,
    meaning: &[String],
) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();

    let Some(caps) = pattern.and_then(|re| re.captures(title)) else {
        fields.insert("title".to_string(), title.to_string());
        return fields;
    };

    for (i, name) in meaning.iter().enumerate() {
        if let Some(m) = caps.get(i + 1) {
            fields.insert(name.clone(), m.as_str().to_string());
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_pattern_returns_raw_title() {
        let fields = decompose_title("feat: add login", None, &[]);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["title"], "feat: add login");
    }

    #[test]
    fn test_non_matching_pattern_returns_raw_title() {
        let re = Regex::new(r"^\[(\w+)\] (.*)$").unwrap();
        let fields = decompose_title("feat: add login", Some(&re), &names(&["kind", "subject"]));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["title"], "feat: add login");
    }

    #[test]
    fn test_match_binds_names_positionally() {
        let re = Regex::new(r"^(\w+): (.*)$").unwrap();
        let fields = decompose_title("feat: add login", Some(&re), &names(&["kind", "subject"]));
        assert_eq!(fields["kind"], "feat");
        assert_eq!(fields["subject"], "add login");
        assert!(!fields.contains_key("title"));
    }

    #[test]
    fn test_fewer_names_than_groups() {
        let re = Regex::new(r"^(\w+)\((\w+)\): (.*)$").unwrap();
        let fields = decompose_title("fix(api): timeout", Some(&re), &names(&["kind"]));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["kind"], "fix");
    }

    #[test]
    fn test_more_names_than_groups() {
        let re = Regex::new(r"^(\w+): .*$").unwrap();
        let fields = decompose_title("docs: readme", Some(&re), &names(&["kind", "subject"]));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["kind"], "docs");
    }

    #[test]
    fn test_optional_group_not_participating_is_skipped() {
        let re = Regex::new(r"^(\w+)(?:\((\w+)\))?: (.*)$").unwrap();
        let fields = decompose_title(
            "feat: no scope",
            Some(&re),
            &names(&["kind", "scope", "title"]),
        );
        assert_eq!(fields["kind"], "feat");
        assert!(!fields.contains_key("scope"));
        assert_eq!(fields["title"], "no scope");
    }

    #[test]
    fn test_whole_match_is_never_bound() {
        let re = Regex::new(r"^wip$").unwrap();
        let fields = decompose_title("wip", Some(&re), &names(&["anything"]));
        assert!(fields.is_empty());
    }
}
