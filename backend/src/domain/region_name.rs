//! Case normalisation for region names.
//!
//! Region names are compared and stored in title case so that lookups,
//! creation and deletion are case-insensitive. The transform only uses
//! Unicode case tables and is independent of the process locale.

/// Title-case `name`: the first letter of every word is upper-cased and the
/// remaining letters lower-cased.
///
/// A word starts after any character that is neither alphanumeric nor an
/// apostrophe, so `"o'brien county"` becomes `"O'brien County"`. Whitespace
/// and punctuation are preserved as given. When a word-initial letter
/// upper-cases to several characters only the first stays upper case, so
/// `"ßmall"` becomes `"Ssmall"`. Word starts are judged on the output, which
/// keeps the transform idempotent.
///
/// # Examples
/// ```
/// use region_server::domain::title_case;
///
/// assert_eq!(title_case("vALiD"), "Valid");
/// assert_eq!(title_case("new   york"), "New   York");
/// assert_eq!(title_case("ﬁre island"), "Fire Island");
/// ```
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut normalised = String::with_capacity(name.len());
    for ch in name.chars() {
        let at_word_start = !normalised.chars().next_back().is_some_and(continues_word);
        if at_word_start {
            let mut upper = ch.to_uppercase();
            normalised.extend(upper.next());
            normalised.extend(upper.flat_map(char::to_lowercase));
        } else {
            normalised.extend(ch.to_lowercase());
        }
    }
    normalised
}

fn continues_word(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '\'' || ch == '\u{2019}'
}
