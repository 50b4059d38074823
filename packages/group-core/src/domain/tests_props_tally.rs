use proptest::prelude::*;

use crate::domain::tally::tally_votes;

fn option_names() -> impl Strategy<Value = Vec<String>> {
    // 2..=6 distinct single-letter options
    prop::sample::subsequence(vec!["A", "B", "C", "D", "E", "F"], 2..=6)
        .prop_map(|v| v.into_iter().map(String::from).collect())
}

proptest! {
    #[test]
    fn percentages_sum_to_one_hundred_or_zero(
        options in option_names(),
        picks in prop::collection::vec(0usize..6, 0..40),
    ) {
        // Map arbitrary indices onto the option list.
        let selections: Vec<String> = picks
            .iter()
            .map(|i| options[i % options.len()].clone())
            .collect();

        let tally = tally_votes(&options, &selections);
        let sum: f64 = tally.iter().map(|t| t.percentage).sum();
        if selections.is_empty() {
            prop_assert_eq!(sum, 0.0);
        } else {
            prop_assert!((sum - 100.0).abs() < 1e-9, "sum was {}", sum);
        }
    }

    #[test]
    fn counts_sum_to_total_votes(
        options in option_names(),
        picks in prop::collection::vec(0usize..6, 0..40),
    ) {
        let selections: Vec<String> = picks
            .iter()
            .map(|i| options[i % options.len()].clone())
            .collect();

        let tally = tally_votes(&options, &selections);
        let total: u64 = tally.iter().map(|t| t.count).sum();
        prop_assert_eq!(total, selections.len() as u64);
    }
}
