//! Small casing helpers shared by the composers.

/// Lower-case the first character only. Mid-sentence interpolation of
/// catalog values that use sentence casing; acronyms later in the string
/// ("Right MCA territory") keep their case.
pub(crate) fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Upper-case the first character only.
pub(crate) fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The user-differential sentence, with its leading space. Appended to the
/// end of an impression paragraph, never emitted on its own line. Trailing
/// periods in the user text are dropped so the sentence ends with exactly
/// one.
pub(crate) fn differential_sentence(text: &str) -> String {
    format!(
        " Differentials: {}.",
        sentence_case(text.trim().trim_end_matches('.'))
    )
}
