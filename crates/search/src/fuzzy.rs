//! Edit-distance similarity and "did you mean" matching.

/// Default minimum score for [`find_closest_match`].
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

/// Bonus added when a candidate contains the query as a substring.
pub const SUBSTRING_BONUS: f64 = 0.3;

/// Common procedure names offered as spelling corrections.
pub const COMMON_MEDICAL_TERMS: &[&str] = &[
    "MRI",
    "CT",
    "X-ray",
    "Ultrasound",
    "Blood test",
    "Mammogram",
    "Colonoscopy",
    "Endoscopy",
    "Surgery",
    "Physical exam",
    "Dental cleaning",
];

/// Calculate Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions each cost one. The comparison is
/// case-sensitive; callers lower-case beforehand when they need otherwise.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Two rows of the (m+1) x (n+1) table are enough
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Case-insensitive similarity between two strings, in `[0, 1]`.
///
/// Two empty strings are a perfect match.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    let max_len = a_lower.chars().count().max(b_lower.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(&a_lower, &b_lower);
    1.0 - distance as f64 / max_len as f64
}

/// Find the candidate closest to `query`.
///
/// Every candidate scores its [`similarity`] to the query, plus
/// [`SUBSTRING_BONUS`] when it contains the query (ignoring case). The
/// highest total that reaches `threshold` wins; on ties the earliest
/// candidate is kept.
///
/// # Returns
/// The winning candidate, or `None` if the query is empty or nothing
/// reached the threshold
pub fn find_closest_match<'a, I>(query: &str, candidates: I, threshold: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return None;
    }

    let query_lower = query.to_lowercase();
    let mut best: Option<&'a str> = None;
    let mut best_score = 0.0;

    for candidate in candidates {
        let candidate_lower = candidate.to_lowercase();
        let bonus = if candidate_lower.contains(&query_lower) { SUBSTRING_BONUS } else { 0.0 };
        let total = similarity(&query_lower, &candidate_lower) + bonus;

        if total > best_score && total >= threshold {
            best_score = total;
            best = Some(candidate);
        }
    }

    best
}

/// Spelling suggestion for a query typed into the search box.
///
/// Queries shorter than `min_query_len` characters get no suggestion.
pub fn suggest<'a, I>(query: &str, candidates: I, threshold: f64, min_query_len: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    if query.chars().count() < min_query_len {
        return None;
    }
    find_closest_match(query, candidates, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edit_distance_same() {
        assert_eq!(edit_distance("hello", "hello"), 0);
    }

    #[test]
    fn test_edit_distance_one_edit() {
        assert_eq!(edit_distance("hello", "hallo"), 1);
    }

    #[test]
    fn test_edit_distance_insert() {
        assert_eq!(edit_distance("helo", "hello"), 1);
    }

    #[test]
    fn test_edit_distance_delete() {
        assert_eq!(edit_distance("hello", "helo"), 1);
    }

    #[test]
    fn test_edit_distance_classic() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_edit_distance_case_sensitive() {
        assert_eq!(edit_distance("MRI", "mri"), 3);
    }

    #[test]
    fn test_edit_distance_empty() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "scan"), 4);
        assert_eq!(edit_distance("scan", ""), 4);
    }

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity("Colonoscopy", "colonoscopy"), 1.0);
    }

    #[test]
    fn test_similarity_both_empty() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_similarity_one_empty() {
        assert_eq!(similarity("", "mri"), 0.0);
    }

    #[test]
    fn test_similarity_partial() {
        // kitten -> sitting is 3 edits over 7 characters
        let score = similarity("kitten", "sitting");
        assert!((score - 4.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_closest_match_substring_bonus() {
        let candidates = ["MRI Brain", "CT Scan", "X-Ray"];
        assert_eq!(find_closest_match("mri", candidates, 0.5), Some("MRI Brain"));
    }

    #[test]
    fn test_closest_match_none_above_threshold() {
        let candidates = ["MRI Brain", "CT Scan"];
        assert_eq!(find_closest_match("zzz", candidates, DEFAULT_MATCH_THRESHOLD), None);
    }

    #[test]
    fn test_closest_match_empty_inputs() {
        assert_eq!(find_closest_match("", ["MRI"], 0.0), None);
        assert_eq!(find_closest_match("mri", std::iter::empty(), 0.0), None);
    }

    #[test]
    fn test_closest_match_typo() {
        assert_eq!(
            find_closest_match("mamogram", COMMON_MEDICAL_TERMS.iter().copied(), 0.6),
            Some("Mammogram")
        );
    }

    #[test]
    fn test_closest_match_first_wins_on_tie() {
        assert_eq!(find_closest_match("scan", ["Scan", "SCAN"], 0.7), Some("Scan"));
    }

    #[test]
    fn test_suggest_short_query() {
        assert_eq!(suggest("mr", COMMON_MEDICAL_TERMS.iter().copied(), 0.6, 3), None);
        assert_eq!(suggest("mri", COMMON_MEDICAL_TERMS.iter().copied(), 0.6, 3), Some("MRI"));
    }

    proptest! {
        #[test]
        fn prop_edit_distance_identity(a in "\\PC{0,24}") {
            prop_assert_eq!(edit_distance(&a, &a), 0);
        }

        #[test]
        fn prop_edit_distance_symmetric(a in "\\PC{0,16}", b in "\\PC{0,16}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn prop_edit_distance_from_empty(s in "\\PC{0,24}") {
            prop_assert_eq!(edit_distance("", &s), s.chars().count());
        }

        #[test]
        fn prop_similarity_in_range(a in "\\PC{0,16}", b in "\\PC{0,16}") {
            let score = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_similarity_self_is_one(a in "[a-zA-Z ]{1,24}") {
            prop_assert_eq!(similarity(&a, &a), 1.0);
        }
    }
}
