//! Mirroring of directional utility classes for RTL layouts.
//!
//! Each token is looked up once and replaced at most once, so `ml-4` becomes
//! `mr-4` and is never turned back into `ml-4` by the opposite rule.

use std::borrow::Cow;

/// Whole-utility swaps.
const EXACT_MIRRORS: &[(&str, &str)] = &[
    ("text-left", "text-right"),
    ("text-right", "text-left"),
    ("rounded-l", "rounded-r"),
    ("rounded-r", "rounded-l"),
    ("rounded-tl", "rounded-tr"),
    ("rounded-tr", "rounded-tl"),
    ("rounded-bl", "rounded-br"),
    ("rounded-br", "rounded-bl"),
    ("border-l", "border-r"),
    ("border-r", "border-l"),
    ("float-left", "float-right"),
    ("float-right", "float-left"),
];

/// Prefix swaps; the remainder of the utility is kept.
const PREFIX_MIRRORS: &[(&str, &str)] = &[
    ("ml-", "mr-"),
    ("mr-", "ml-"),
    ("pl-", "pr-"),
    ("pr-", "pl-"),
    ("left-", "right-"),
    ("right-", "left-"),
    ("rounded-l-", "rounded-r-"),
    ("rounded-r-", "rounded-l-"),
    ("rounded-tl-", "rounded-tr-"),
    ("rounded-tr-", "rounded-tl-"),
    ("rounded-bl-", "rounded-br-"),
    ("rounded-br-", "rounded-bl-"),
    ("border-l-", "border-r-"),
    ("border-r-", "border-l-"),
];

/// Swap left/right utilities in a whitespace-separated class string.
///
/// Separators (spaces, tabs, newlines) are kept exactly. With `rtl == false`
/// the input is returned as-is.
pub fn mirror_class(class: &str, rtl: bool) -> Cow<'_, str> {
    if !rtl {
        return Cow::Borrowed(class);
    }

    let mut changed = false;
    let mut mirrored = String::with_capacity(class.len());
    for piece in class.split_inclusive(char::is_whitespace) {
        let token = piece.trim_end_matches(char::is_whitespace);
        match mirror_token(token) {
            Some(swapped) => {
                changed = true;
                mirrored.push_str(&swapped);
                mirrored.push_str(&piece[token.len()..]);
            }
            None => mirrored.push_str(piece),
        }
    }

    if changed {
        Cow::Owned(mirrored)
    } else {
        Cow::Borrowed(class)
    }
}

/// Mirror a single token, keeping variant (`md:`) and negative (`-`) prefixes.
fn mirror_token(token: &str) -> Option<String> {
    let (variants, utility) = match token.rfind(':') {
        Some(i) => token.split_at(i + 1),
        None => ("", token),
    };
    let (negative, utility) = match utility.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", utility),
    };

    let mirrored = mirror_utility(utility)?;
    Some(format!("{}{}{}", variants, negative, mirrored))
}

fn mirror_utility(utility: &str) -> Option<String> {
    if let Some((_, to)) = EXACT_MIRRORS.iter().find(|(from, _)| *from == utility) {
        return Some((*to).to_string());
    }

    PREFIX_MIRRORS.iter().find_map(|(from, to)| {
        utility
            .strip_prefix(from)
            .filter(|rest| !rest.is_empty())
            .map(|rest| format!("{}{}", to, rest))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Identity Tests ====================

    #[test]
    fn test_ltr_is_identity() {
        let class = "ml-4 text-left rounded-l-lg";
        assert_eq!(mirror_class(class, false), class);
    }

    #[test]
    fn test_ltr_borrows() {
        assert!(matches!(mirror_class("ml-4", false), Cow::Borrowed(_)));
    }

    #[test]
    fn test_rtl_without_directional_tokens_borrows() {
        let class = "flex items-center gap-2";
        let mirrored = mirror_class(class, true);
        assert!(matches!(mirrored, Cow::Borrowed(_)));
        assert_eq!(mirrored, class);
    }

    // ==================== Swap Tests ====================

    #[test]
    fn test_margin() {
        assert_eq!(mirror_class("ml-4", true), "mr-4");
        assert_eq!(mirror_class("mr-auto", true), "ml-auto");
    }

    #[test]
    fn test_padding() {
        assert_eq!(mirror_class("pl-2 pr-6", true), "pr-2 pl-6");
    }

    #[test]
    fn test_text_alignment() {
        assert_eq!(mirror_class("text-left", true), "text-right");
        assert_eq!(mirror_class("text-right", true), "text-left");
    }

    #[test]
    fn test_position() {
        assert_eq!(mirror_class("absolute left-0 top-2", true), "absolute right-0 top-2");
        assert_eq!(mirror_class("right-1/2", true), "left-1/2");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(mirror_class("rounded-l", true), "rounded-r");
        assert_eq!(mirror_class("rounded-r-xl", true), "rounded-l-xl");
        assert_eq!(mirror_class("rounded-tl-md", true), "rounded-tr-md");
        assert_eq!(mirror_class("rounded-br", true), "rounded-bl");
    }

    #[test]
    fn test_border_and_float() {
        assert_eq!(mirror_class("border-l-4", true), "border-r-4");
        assert_eq!(mirror_class("float-left", true), "float-right");
    }

    #[test]
    fn test_both_directions_swap_once() {
        assert_eq!(mirror_class("ml-2 mr-4", true), "mr-2 ml-4");
        assert_eq!(mirror_class("left-0 right-0", true), "right-0 left-0");
    }

    #[test]
    fn test_variants_and_negatives() {
        assert_eq!(mirror_class("md:ml-4", true), "md:mr-4");
        assert_eq!(mirror_class("hover:text-left", true), "hover:text-right");
        assert_eq!(mirror_class("-ml-2", true), "-mr-2");
        assert_eq!(mirror_class("lg:-left-4", true), "lg:-right-4");
    }

    // ==================== Non-match Tests ====================

    #[test]
    fn test_lookalikes_are_untouched() {
        assert_eq!(mirror_class("rounded-lg", true), "rounded-lg");
        assert_eq!(mirror_class("border-lime-500", true), "border-lime-500");
        assert_eq!(mirror_class("text-lg", true), "text-lg");
        assert_eq!(mirror_class("ml-", true), "ml-");
    }

    #[test]
    fn test_spacing_is_preserved() {
        assert_eq!(mirror_class("  ml-4  flex ", true), "  mr-4  flex ");
    }

    #[test]
    fn test_newline_and_tab_separators() {
        assert_eq!(mirror_class("ml-4\nmr-2", true), "mr-4\nml-2");
        assert_eq!(mirror_class("pl-2\tpr-6 text-left", true), "pr-2\tpl-6 text-right");
        assert_eq!(
            mirror_class("flex\r\n  md:ml-4\n\t-left-2 ", true),
            "flex\r\n  md:mr-4\n\t-right-2 "
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(mirror_class("", true), "");
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_ltr_identity(class in ".*") {
            prop_assert_eq!(mirror_class(&class, false), class.as_str());
        }

        #[test]
        fn prop_rtl_twice_restores(class in "((ml|mr|pl|pr|left|right)-[0-9]{1,2}|text-(left|right)|flex)([ \t\n]((ml|mr|pl|pr)-[0-9]|gap-2)){0,4}") {
            let once = mirror_class(&class, true).into_owned();
            prop_assert_eq!(mirror_class(&once, true), class.as_str());
        }
    }
}
