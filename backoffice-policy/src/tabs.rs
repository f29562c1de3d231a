//! # Tab partitioning
//!
//! Splits an ordered property list into tab groups on a delimiter sentinel.
//! The sentinel is a structural separator only; it never appears as a
//! visible property.
//!
//! Group policy: each delimiter occurrence starts a new group, and interior
//! empty groups are preserved (an author can deliberately configure an empty
//! middle tab). A trailing delimiter does NOT open an empty trailing group.
//! A list without delimiters is one implicit ungrouped tab, which callers
//! render flat with no tab chrome.

/// Split `entries` into tab groups on `delimiter`.
///
/// Returns at least one group (possibly empty). For a list with `k`
/// delimiter occurrences and content after the last delimiter, the result
/// has `k + 1` groups; a trailing delimiter yields `k` groups.
///
/// # Example
///
/// ```
/// use backoffice_policy::tabs::split_groups;
///
/// let entries: Vec<String> = ["a", "b", "TAB", "c"].iter().map(|s| s.to_string()).collect();
/// let groups = split_groups(&entries, "TAB");
/// assert_eq!(groups, vec![vec!["a", "b"], vec!["c"]]);
/// ```
pub fn split_groups<'a>(entries: &'a [String], delimiter: &str) -> Vec<Vec<&'a str>> {
    let mut groups: Vec<Vec<&'a str>> = vec![Vec::new()];
    for entry in entries {
        if entry == delimiter {
            groups.push(Vec::new());
        } else if let Some(group) = groups.last_mut() {
            group.push(entry.as_str());
        }
    }

    // A trailing delimiter would otherwise leave an empty trailing group.
    if entries.last().is_some_and(|e| e == delimiter) {
        groups.pop();
    }

    groups
}

/// The ordered entries with every delimiter occurrence removed.
pub fn flatten<'a>(entries: &'a [String], delimiter: &str) -> Vec<&'a str> {
    entries
        .iter()
        .filter(|e| e.as_str() != delimiter)
        .map(|e| e.as_str())
        .collect()
}

/// Number of tab groups the list partitions into.
pub fn tab_count(entries: &[String], delimiter: &str) -> usize {
    split_groups(entries, delimiter).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_delimiter_single_group() {
        let list = entries(&["a", "b", "c"]);
        let groups = split_groups(&list, "TAB");
        assert_eq!(groups, vec![vec!["a", "b", "c"]]);
        assert_eq!(tab_count(&list, "TAB"), 1);
    }

    #[test]
    fn test_delimiters_create_groups() {
        let list = entries(&["a", "TAB", "b", "c", "TAB", "d"]);
        let groups = split_groups(&list, "TAB");
        assert_eq!(groups, vec![vec!["a"], vec!["b", "c"], vec!["d"]]);
        assert_eq!(tab_count(&list, "TAB"), 3);
    }

    #[test]
    fn test_trailing_delimiter_opens_no_group() {
        let list = entries(&["a", "b", "TAB"]);
        let groups = split_groups(&list, "TAB");
        assert_eq!(groups, vec![vec!["a", "b"]]);
        assert_eq!(tab_count(&list, "TAB"), 1);
    }

    #[test]
    fn test_leading_and_interior_empty_groups_preserved() {
        let list = entries(&["TAB", "a", "TAB", "TAB", "b"]);
        let groups = split_groups(&list, "TAB");
        assert_eq!(
            groups,
            vec![Vec::<&str>::new(), vec!["a"], Vec::new(), vec!["b"]]
        );
    }

    #[test]
    fn test_empty_list() {
        let list: Vec<String> = Vec::new();
        assert_eq!(split_groups(&list, "TAB"), vec![Vec::<&str>::new()]);
        assert_eq!(tab_count(&list, "TAB"), 1);
        assert!(flatten(&list, "TAB").is_empty());
    }

    #[test]
    fn test_flatten_removes_delimiters_only() {
        let list = entries(&["a", "TAB", "b", "TAB"]);
        assert_eq!(flatten(&list, "TAB"), vec!["a", "b"]);
    }

    #[test]
    fn test_round_trip() {
        // Concatenating the groups reproduces the delimiter-free list.
        let list = entries(&["a", "TAB", "b", "c", "TAB", "d", "e"]);
        let groups = split_groups(&list, "TAB");
        assert_eq!(groups.len(), 3);

        let rejoined: Vec<&str> = groups.into_iter().flatten().collect();
        assert_eq!(rejoined, flatten(&list, "TAB"));
    }

    #[test]
    fn test_custom_delimiter_token() {
        let list = entries(&["a", "---", "b"]);
        assert_eq!(split_groups(&list, "---"), vec![vec!["a"], vec!["b"]]);
        // The default-looking token is not special if another is configured.
        assert_eq!(split_groups(&list, "TAB"), vec![vec!["a", "---", "b"]]);
    }
}
