use super::QaRecord;

/// Records whose question or answer contains `term`, ignoring case.
///
/// A blank term selects every record. The result borrows from `records` and
/// keeps their order, so it is always a subsequence of the input.
pub fn filtered_view<'a>(records: &'a [QaRecord], term: &str) -> Vec<&'a QaRecord> {
    if term.trim().is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.question.to_lowercase().contains(&needle)
                || record.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages() -> Vec<QaRecord> {
        vec![
            QaRecord::new("1", "What is Go?", "A language"),
            QaRecord::new("2", "What is Rust?", "Another language"),
        ]
    }

    fn ids(view: &[&QaRecord]) -> Vec<String> {
        view.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_go_matches_only_first() {
        let records = languages();
        assert_eq!(ids(&filtered_view(&records, "go")), vec!["1"]);
    }

    #[test]
    fn test_blank_term_returns_everything() {
        let records = languages();
        for term in ["", "   ", "\t\n"] {
            let view = filtered_view(&records, term);
            assert_eq!(view.len(), records.len());
            for (viewed, original) in view.iter().zip(records.iter()) {
                assert!(std::ptr::eq(*viewed, original));
            }
        }
    }

    #[test]
    fn test_matches_answer_case_insensitively() {
        let records = languages();
        assert_eq!(ids(&filtered_view(&records, "ANOTHER")), vec!["2"]);
        assert_eq!(ids(&filtered_view(&records, "Language")), vec!["1", "2"]);
    }

    #[test]
    fn test_no_match() {
        let records = languages();
        assert!(filtered_view(&records, "python").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let records = vec![
            QaRecord::new("a", "alpha", "x"),
            QaRecord::new("b", "beta", "y"),
            QaRecord::new("c", "gamma", "alphabet"),
            QaRecord::new("d", "delta", "z"),
        ];
        let view = filtered_view(&records, "alph");
        assert_eq!(ids(&view), vec!["a", "c"]);

        let positions: Vec<usize> = view
            .iter()
            .map(|r| records.iter().position(|o| std::ptr::eq(o, *r)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_repeatable() {
        let records = languages();
        let first = ids(&filtered_view(&records, "what"));
        let second = ids(&filtered_view(&records, "what"));
        assert_eq!(first, second);
        assert_eq!(records.len(), 2);
    }
}
