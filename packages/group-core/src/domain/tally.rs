//! Live tally math for ballot sessions.

/// Per-option distribution entry, in ballot order.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionTally {
    pub option: String,
    pub count: u64,
    /// `count / total * 100`; 0 for every option when there are no votes.
    pub percentage: f64,
}

/// Compute the raw distribution for a session.
///
/// `selections` are the `option_selected` values of the session's votes;
/// by the store's invariants each belongs to `options`. Ties are not
/// broken - callers receive the distribution as-is.
pub fn tally_votes(options: &[String], selections: &[String]) -> Vec<OptionTally> {
    let total = selections.len() as u64;
    options
        .iter()
        .map(|option| {
            let count = selections.iter().filter(|s| *s == option).count() as u64;
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            OptionTally {
                option: option.clone(),
                count,
                percentage,
            }
        })
        .collect()
}
