//! Conditional class-name joining for primitive markup.

/// Joins the truthy class-name candidates with single spaces, preserving input order.
///
/// `None` and empty strings are dropped. Duplicates are kept as given.
///
/// ```rust
/// use system_ui::cn;
///
/// let selected = true;
/// let disabled = false;
/// assert_eq!(
///     cn([Some("note-item"), selected.then_some("selected"), disabled.then_some("muted")]),
///     "note-item selected"
/// );
/// ```
pub fn cn<I, S>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for candidate in candidates.into_iter().flatten() {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(candidate);
    }
    joined
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keeps_truthy_values_in_order() {
        assert_eq!(
            cn([Some("a"), None, Some(""), Some("b"), Some("c")]),
            "a b c"
        );
    }

    #[test]
    fn all_falsy_inputs_join_to_empty() {
        assert_eq!(cn([None::<&str>, Some(""), None]), "");
        assert_eq!(cn(Vec::<Option<&str>>::new()), "");
    }

    #[test]
    fn duplicates_are_not_removed() {
        assert_eq!(cn([Some("x"), Some("x")]), "x x");
    }

    #[test]
    fn owned_strings_are_accepted() {
        let dynamic = format!("ui-button--{}", "lg");
        assert_eq!(cn([Some("ui-button".to_string()), Some(dynamic)]), "ui-button ui-button--lg");
    }
}
