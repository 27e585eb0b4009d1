//! Human-readable list formatting for user-facing messages.

/// Quote every item and join them as `'A', 'B' and 'C'`.
///
/// One item renders as `'A'`, two as `'A' and 'B'`, none as an empty string.
pub fn format_quoted_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.as_ref()))
        .collect();

    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_empty_string() {
        let items: [&str; 0] = [];
        assert_eq!(format_quoted_list(&items), "");
    }

    #[test]
    fn single_item_has_no_conjunction() {
        assert_eq!(format_quoted_list(&["SqlServer"]), "'SqlServer'");
    }

    #[test]
    fn two_items_joined_with_and() {
        assert_eq!(format_quoted_list(&["A", "B"]), "'A' and 'B'");
    }

    #[test]
    fn many_items_use_commas_then_and() {
        assert_eq!(format_quoted_list(&["A", "B", "C"]), "'A', 'B' and 'C'");
        assert_eq!(
            format_quoted_list(&["A", "B", "C", "D"]),
            "'A', 'B', 'C' and 'D'"
        );
    }

    #[test]
    fn accepts_owned_strings() {
        let items = vec![String::from("x"), String::from("y")];
        assert_eq!(format_quoted_list(&items), "'x' and 'y'");
    }
}
