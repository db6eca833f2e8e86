//! "Did you mean" suggestions for unknown option names.

/// Maximum edit distance for a name to count as "close".
const MAX_DISTANCE: usize = 3;

/// Find the declared name closest to the input, if any is close enough.
pub(crate) fn find_similar<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    candidates
        .into_iter()
        .min_by_key(|candidate| strsim::levenshtein(input, candidate))
        .filter(|candidate| strsim::levenshtein(input, candidate) <= MAX_DISTANCE)
        .map(|candidate| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_typo_suggests() {
        let names = ["excludePrivate", "excludeProtected", "logLevel"];
        assert_eq!(find_similar("logLevl", names).as_deref(), Some("logLevel"));
        // A dropped character mid-word is still close.
        assert_eq!(
            find_similar("excludPrivate", names).as_deref(),
            Some("excludePrivate")
        );
    }

    #[test]
    fn test_distant_input_suggests_nothing() {
        let names = ["excludePrivate", "logLevel"];
        assert_eq!(find_similar("frobnicate", names), None);
    }

    #[test]
    fn test_nearest_candidate_wins() {
        let names = ["gitRemote", "gitRevision"];
        assert_eq!(find_similar("gitRemot", names).as_deref(), Some("gitRemote"));
    }
}
