use crate::domain::tally::tally_votes;

fn opts(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn tally_counts_and_percentages() {
    let options = opts(&["A", "B", "C"]);
    let selections = opts(&["A", "B", "A", "A"]);

    let tally = tally_votes(&options, &selections);
    assert_eq!(tally.len(), 3);
    assert_eq!(tally[0].count, 3);
    assert_eq!(tally[1].count, 1);
    assert_eq!(tally[2].count, 0);
    assert!((tally[0].percentage - 75.0).abs() < f64::EPSILON);
    assert!((tally[1].percentage - 25.0).abs() < f64::EPSILON);
    assert_eq!(tally[2].percentage, 0.0);
}

#[test]
fn empty_session_tallies_to_all_zero_percentages() {
    let tally = tally_votes(&opts(&["yes", "no"]), &[]);
    for entry in &tally {
        assert_eq!(entry.count, 0);
        assert_eq!(entry.percentage, 0.0);
    }
}

#[test]
fn tally_preserves_ballot_order() {
    let options = opts(&["zebra", "apple", "mango"]);
    let tally = tally_votes(&options, &opts(&["mango"]));
    let order: Vec<&str> = tally.iter().map(|t| t.option.as_str()).collect();
    assert_eq!(order, ["zebra", "apple", "mango"]);
}

#[test]
fn ties_are_reported_raw() {
    let tally = tally_votes(&opts(&["A", "B"]), &opts(&["A", "B"]));
    assert_eq!(tally[0].count, tally[1].count);
    assert!((tally[0].percentage - 50.0).abs() < f64::EPSILON);
}
