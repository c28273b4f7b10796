//! Ordered fallback lookup over optional display values.

/// Return the first candidate that is present and non-empty.
///
/// Candidates are tried in order; `None` and `Some("")` are both skipped.
/// Used wherever a displayed value has several optional sources, with the
/// caller supplying the final placeholder via `unwrap_or`.
pub fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}
