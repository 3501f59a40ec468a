// Fuzzy matching utilities for lead lookup suggestions

/// Calculate Levenshtein distance between two strings
/// Returns the minimum number of single-character edits (insertions, deletions, substitutions)
/// needed to transform one string into another
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two-row variant of the edit matrix
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}

/// Check if s2 is a substring of s1 (case-insensitive)
pub fn is_substring_match(s1: &str, s2: &str) -> bool {
    s1.to_lowercase().contains(&s2.to_lowercase())
}

/// Find leads whose id or name is close to `search`.
/// Returns up to 5 `(id, name)` pairs, closest first.
pub fn find_near_lead_matches(
    search: &str,
    leads: &[(String, String)], // (id, name)
    max_distance: usize,
) -> Vec<(String, String)> {
    let search_lower = search.to_lowercase();
    let mut matches: Vec<(usize, &String, &String)> = Vec::new();

    for (id, name) in leads {
        let id_distance = levenshtein_distance(&search_lower, &id.to_lowercase());
        let distance = if id_distance <= max_distance {
            Some(id_distance)
        } else if search_lower.len() >= 3 && is_substring_match(name, search) {
            // Name hits rank after close ids
            Some(max_distance + 1)
        } else {
            None
        };

        if let Some(distance) = distance {
            matches.push((distance, id, name));
        }
    }

    matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    matches
        .into_iter()
        .take(5)
        .map(|(_, id, name)| (id.clone(), name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("same", "same"), 0);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
    }

    #[test]
    fn test_is_substring_match() {
        assert!(is_substring_match("Camila Soto", "soto"));
        assert!(is_substring_match("Camila Soto", "CAMILA"));
        assert!(!is_substring_match("Camila Soto", "diego"));
    }

    #[test]
    fn test_find_near_lead_matches() {
        let leads = vec![
            ("L-101".to_string(), "Camila Soto".to_string()),
            ("L-102".to_string(), "Diego Fuentes".to_string()),
            ("L-230".to_string(), "Jorge Pino".to_string()),
        ];

        let matches = find_near_lead_matches("L-10", &leads, 1);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].0, "L-101");

        // Name substring
        let matches = find_near_lead_matches("pino", &leads, 1);
        assert_eq!(matches, vec![("L-230".to_string(), "Jorge Pino".to_string())]);

        let matches = find_near_lead_matches("zzzzzz", &leads, 2);
        assert!(matches.is_empty());
    }
}
