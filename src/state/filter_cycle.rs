//! Cycling a filter through its options, with "all" as the wrap point.

/// Next filter value after `current`.
///
/// The cycle is `None → options[0] → … → options[n-1] → None`. A current
/// value that is not among `options` restarts the cycle.
pub fn next_option(current: Option<&str>, options: &[String]) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => match options.iter().position(|o| o == value) {
            Some(idx) => options.get(idx + 1).cloned(),
            None => options.first().cloned(),
        },
    }
}

/// Previous filter value before `current`, the mirror of [`next_option`].
pub fn prev_option(current: Option<&str>, options: &[String]) -> Option<String> {
    match current {
        None => options.last().cloned(),
        Some(value) => match options.iter().position(|o| o == value) {
            Some(0) => None,
            Some(idx) => options.get(idx - 1).cloned(),
            None => options.last().cloned(),
        },
    }
}
