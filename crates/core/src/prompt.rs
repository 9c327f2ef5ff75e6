//! Prompt sent to the language model for each dream.

/// Build the interpretation prompt.
///
/// The three fields are embedded as-is; callers substitute
/// [`NOT_SPECIFIED`](crate::journal::NOT_SPECIFIED) for blank optional fields
/// before calling this.
pub fn build_prompt(dream_text: &str, emotions: &str, symbols: &str) -> String {
    format!(
        "You are a dream interpreter providing reflective and creative insights.\n\
         Analyze the user's dream description and offer a speculative interpretation \
         based on common dream symbolism.\n\
         Keep the response short (3-4 sentences), emphasize and provide psychological diagnoses.\n\
         Dream description: {dream_text}\n\
         Emotions felt during dream: {emotions}\n\
         Key symbols or themes: {symbols}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_fields_on_their_own_lines() {
        let prompt = build_prompt("I was flying over mountains", "joy", "wings");

        assert!(prompt.starts_with("You are a dream interpreter"));
        assert!(prompt.contains("\nDream description: I was flying over mountains\n"));
        assert!(prompt.contains("\nEmotions felt during dream: joy\n"));
        assert!(prompt.contains("\nKey symbols or themes: wings\n"));
    }

    #[test]
    fn user_text_is_not_escaped() {
        let prompt = build_prompt("<b>\"quoted\"</b>\nsecond line", "a & b", "{x}");

        assert!(prompt.contains("<b>\"quoted\"</b>\nsecond line"));
        assert!(prompt.contains("a & b"));
        assert!(prompt.contains("{x}"));
    }
}
