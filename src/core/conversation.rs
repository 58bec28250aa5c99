//! Idea workshop conversation.

/// Who said a line in the workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// The writer.
    User,
    /// The generated workshop coach.
    Coach,
}

impl Speaker {
    /// Returns the label used in transcripts sent to the backend.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Coach => "Coach",
        }
    }

    /// Returns the label shown in the chat log.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Coach => "Coach",
        }
    }
}

/// One line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub message: String,
}

/// Ordered, append-only conversation for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn.
    pub fn push(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.turns.push(Turn {
            speaker,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Renders the conversation as `Speaker: message` lines.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.turns
            .iter()
            .map(|turn| format!("{}: {}", turn.speaker.name(), turn.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_conversation_has_empty_transcript() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert_eq!(conversation.transcript(), "");
    }

    #[test]
    fn transcript_keeps_order_and_labels() {
        let mut conversation = Conversation::new();
        conversation.push(Speaker::User, "A detective in Mars colony");
        conversation.push(Speaker::Coach, "Who hired the detective?");
        conversation.push(Speaker::User, "Nobody. She hired herself.");

        assert_eq!(conversation.len(), 3);
        assert_eq!(
            conversation.transcript(),
            "User: A detective in Mars colony\n\
             Coach: Who hired the detective?\n\
             User: Nobody. She hired herself."
        );
    }

    #[test]
    fn multiline_messages_are_kept_verbatim() {
        let mut conversation = Conversation::new();
        conversation.push(Speaker::User, "line one\nline two");
        assert_eq!(conversation.transcript(), "User: line one\nline two");
    }

    #[test]
    fn display_names_differ_for_user() {
        assert_eq!(Speaker::User.display_name(), "You");
        assert_eq!(Speaker::Coach.display_name(), "Coach");
    }
}
