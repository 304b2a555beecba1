//! The `name::slot` suffix accepted on block open tags.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_until},
    combinator::{rest, verify},
    sequence::{pair, preceded},
};

const SLOT_SEPARATOR: &str = "::";

fn slot_suffix(input: &str) -> IResult<&str, (&str, &str)> {
    pair(
        verify(take_until(SLOT_SEPARATOR), |head: &str| !head.is_empty()),
        preceded(tag(SLOT_SEPARATOR), alt((take_until(SLOT_SEPARATOR), rest))),
    )
    .parse(input)
}

/// Splits `name::slot` into `("name", "slot")`.
///
/// Returns `None` when there is no `::`, or when it is the very first thing
/// in the input. With more than one separator, the slot is the text between
/// the first and the second.
pub fn split_slot_suffix(input: &str) -> Option<(&str, &str)> {
    slot_suffix(input).ok().map(|(_, split)| split)
}

/// Removes everything from the first `::` on.
pub(crate) fn strip_slot_suffix(input: &str) -> &str {
    input.split(SLOT_SEPARATOR).next().unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_name_and_slot() {
        assert_eq!(split_slot_suffix("eq::result"), Some(("eq", "result")));
        assert_eq!(split_slot_suffix("my-card::header"), Some(("my-card", "header")));
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(split_slot_suffix("each"), None);
        assert_eq!(split_slot_suffix("a:b"), None);
        assert_eq!(split_slot_suffix(""), None);
    }

    #[test]
    fn test_leading_separator_is_ignored() {
        assert_eq!(split_slot_suffix("::header"), None);
    }

    #[test]
    fn test_empty_and_repeated_slots() {
        assert_eq!(split_slot_suffix("card::"), Some(("card", "")));
        assert_eq!(split_slot_suffix("card::header::extra"), Some(("card", "header")));
    }

    #[test]
    fn test_strip_slot_suffix() {
        assert_eq!(strip_slot_suffix("card::header"), "card");
        assert_eq!(strip_slot_suffix("card"), "card");
    }
}
