//! The localization seam. The original theme routed every user-visible
//! string through a translation layer and selected singular/plural message
//! templates by count; here that collaborator is an explicit trait the
//! caller injects, with an identity English implementation as the default.

use std::borrow::Cow;

/// Maps message identifiers to locale-specific strings. The default methods
/// implement the identity (English) behavior, so a locale only needs to
/// override what it actually translates.
pub trait Localize {
    /// Translates a plain string.
    fn text<'a>(&self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }

    /// Selects the correctly inflected message template for `n`. The
    /// templates carry a `%s` placeholder for the count; substitution is the
    /// caller's job (see [`sprintf`]), since some locales reorder the
    /// surrounding words rather than the number.
    fn plural<'a>(&self, singular: &'a str, plural: &'a str, n: u64) -> Cow<'a, str> {
        Cow::Borrowed(match n {
            1 => singular,
            _ => plural,
        })
    }
}

/// The identity locale: English text straight through, plural for any count
/// other than one.
pub struct DefaultLocale;

impl Localize for DefaultLocale {}

/// Substitutes `arg` for the first `%s` placeholder in `template`.
pub fn sprintf(template: &str, arg: &str) -> String {
    template.replacen("%s", arg, 1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_plural_selection() {
        assert_eq!("%s min ago", DefaultLocale.plural("%s min ago", "%s mins ago", 1));
        assert_eq!("%s mins ago", DefaultLocale.plural("%s min ago", "%s mins ago", 0));
        assert_eq!("%s mins ago", DefaultLocale.plural("%s min ago", "%s mins ago", 2));
    }

    #[test]
    fn test_default_text_is_identity() {
        assert_eq!("Posted by", DefaultLocale.text("Posted by"));
    }

    #[test]
    fn test_sprintf_substitutes_first_placeholder_only() {
        assert_eq!("5 mins ago", sprintf("%s mins ago", "5"));
        assert_eq!("5 of %s", sprintf("%s of %s", "5"));
        assert_eq!("no placeholder", sprintf("no placeholder", "5"));
    }
}
