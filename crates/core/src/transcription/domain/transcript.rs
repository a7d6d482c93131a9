/// The text produced by a transcription run.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Words separated by whitespace runs, so blank lines between paragraphs
    /// do not count.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_splits_on_whitespace_runs() {
        let transcript = Transcript::new("one  two\n\nthree\tfour ");
        assert_eq!(transcript.word_count(), 4);
    }

    #[test]
    fn test_word_count_of_empty_text_is_zero() {
        assert_eq!(Transcript::new("").word_count(), 0);
        assert_eq!(Transcript::new("  \n ").word_count(), 0);
    }

    #[test]
    fn test_text_round_trips() {
        let transcript = Transcript::new("hello world");
        assert_eq!(transcript.text(), "hello world");
    }
}
