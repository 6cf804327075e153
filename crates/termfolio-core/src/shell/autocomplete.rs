//! Tab completion of command names.
//!
//! - Single match: fill in the full name
//! - Multiple matches: list every candidate in registry order
//! - No match: leave the input alone

use super::CommandKind;

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single exact match - complete with this value.
    Single(String),
    /// Multiple matches, in registry order.
    Multiple(Vec<String>),
    /// No matches found.
    None,
}

/// Completes `input` against the command registry.
///
/// The whole input is treated as a command-name prefix, so an empty input
/// matches every command and anything containing a space matches none.
pub fn autocomplete(input: &str) -> AutocompleteResult {
    let partial = input.to_lowercase();
    let mut matches: Vec<String> = CommandKind::names()
        .filter(|name| name.starts_with(&partial))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(matches.remove(0)),
        _ => AutocompleteResult::Multiple(matches),
    }
}

/// Ghost-text suffix for the input: the rest of the first command that
/// starts with it.
pub fn hint(input: &str) -> Option<&'static str> {
    if input.is_empty() {
        return None;
    }
    let partial = input.to_lowercase();
    CommandKind::names()
        .find(|name| name.starts_with(&partial) && name.len() > partial.len())
        .map(|name| &name[partial.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match() {
        assert_eq!(autocomplete("neo"), AutocompleteResult::Single("neofetch".into()));
        assert_eq!(autocomplete("HIS"), AutocompleteResult::Single("history".into()));
    }

    #[test]
    fn test_exact_name_completes_to_itself() {
        assert_eq!(autocomplete("pwd"), AutocompleteResult::Single("pwd".into()));
    }

    #[test]
    fn test_multiple_matches_in_registry_order() {
        assert_eq!(
            autocomplete("c"),
            AutocompleteResult::Multiple(vec![
                "clear".into(),
                "cd".into(),
                "cat".into(),
                "curl".into(),
                "chmod".into(),
            ])
        );
    }

    #[test]
    fn test_empty_lists_everything() {
        match autocomplete("") {
            AutocompleteResult::Multiple(all) => assert_eq!(all.len(), 26),
            other => panic!("expected all commands, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(autocomplete("xyz"), AutocompleteResult::None);
        assert_eq!(autocomplete("cd ab"), AutocompleteResult::None);
    }

    #[test]
    fn test_hint() {
        assert_eq!(hint("neo"), Some("fetch"));
        assert_eq!(hint("pwd"), None);
        assert_eq!(hint(""), None);
        assert_eq!(hint("zz"), None);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unique_prefix_completes_to_full_name(
                index in 0usize..26,
                cut in 1usize..9,
            ) {
                let kind = CommandKind::ALL[index];
                let name = kind.name();
                let prefix = &name[..cut.min(name.len())];
                let unique = CommandKind::names().filter(|n| n.starts_with(prefix)).count() == 1;
                if unique {
                    prop_assert_eq!(autocomplete(prefix), AutocompleteResult::Single(name.to_string()));
                }
            }

            #[test]
            fn no_match_leaves_nothing_to_fill(input in "[qjx][a-z]{0,6}") {
                prop_assert_eq!(autocomplete(&input), AutocompleteResult::None);
            }
        }
    }
}
