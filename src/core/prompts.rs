//! System instructions and prompt builders for every tab action.
//!
//! Each builder returns a [`Prompt`]: the user-facing prompt body plus the
//! fixed system instruction that steers the backend for that feature.

use super::conversation::Conversation;

/// Coaching persona for the idea workshop chat.
pub const WORKSHOP_COACH_SYSTEM: &str = "You are a creative writing idea workshop coach. \
Guide the user through idea generation: premise, characters, stakes, setting, tone, and key themes. \
Ask one focused question per turn.";

/// Report synthesis instruction for saving the workshop.
pub const WORKSHOP_REPORT_SYSTEM: &str = "You are a writing workshop assistant. \
Create a complete idea report from the conversation. \
Include premise, characters, plot arc, worldbuilding, themes, and next steps.";

/// Style guide authoring instruction.
pub const STYLE_PROFILE_SYSTEM: &str = "You are a literary style analyst. \
Create a comprehensive style guide from the provided notes. \
Provide sections on voice, diction, pacing, structure, and examples of do/don't guidance.";

/// Fact verification instruction.
pub const FACT_CHECK_SYSTEM: &str = "You are a fact checker. \
Use Google Search and the provided fact library to verify claims. \
Provide a verdict for each claim, cite sources when possible, and highlight any discrepancies.";

/// Style deviation check instruction.
pub const STYLE_CHECK_SYSTEM: &str = "You are a style checker. \
Compare the text against the style profile and list specific deviations with suggested fixes.";

/// Consistency check instruction.
pub const CONSISTENCY_CHECK_SYSTEM: &str = "You are a consistency checker. \
Compare the text against the idea workshop report and highlight inconsistencies or missing elements.";

/// A prompt body paired with its system instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub body: String,
    pub system: &'static str,
}

/// Next coach turn for the workshop conversation.
#[must_use]
pub fn coach_reply(conversation: &Conversation) -> Prompt {
    Prompt {
        body: format!(
            "Continue the workshop conversation. Respond as the coach.\n\n\
             Conversation so far:\n{}",
            conversation.transcript()
        ),
        system: WORKSHOP_COACH_SYSTEM,
    }
}

/// Idea report synthesized from the whole conversation.
#[must_use]
pub fn workshop_report(conversation: &Conversation) -> Prompt {
    Prompt {
        body: format!("Conversation transcript:\n{}", conversation.transcript()),
        system: WORKSHOP_REPORT_SYSTEM,
    }
}

/// Style profile from an optional author hint and the style notes.
#[must_use]
pub fn style_profile(author: &str, description: &str) -> Prompt {
    let author = if author.is_empty() {
        "Not specified"
    } else {
        author
    };
    Prompt {
        body: format!("Author inspiration: {author}\nStyle notes: {description}"),
        system: STYLE_PROFILE_SYSTEM,
    }
}

/// Fact check of `text` against the fact library.
#[must_use]
pub fn fact_check(library: &str, text: &str) -> Prompt {
    Prompt {
        body: format!("Fact library:\n{library}\n\nText to verify:\n{text}"),
        system: FACT_CHECK_SYSTEM,
    }
}

/// Style check of `text` against the style profile.
#[must_use]
pub fn style_check(style_profile: &str, text: &str) -> Prompt {
    Prompt {
        body: format!("Style profile:\n{style_profile}\n\nText to review:\n{text}"),
        system: STYLE_CHECK_SYSTEM,
    }
}

/// Consistency check of `text` against the idea report.
#[must_use]
pub fn consistency_check(idea_report: &str, text: &str) -> Prompt {
    Prompt {
        body: format!("Idea workshop report:\n{idea_report}\n\nText to review:\n{text}"),
        system: CONSISTENCY_CHECK_SYSTEM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conversation::Speaker;

    fn sample_conversation() -> Conversation {
        let mut conversation = Conversation::new();
        conversation.push(Speaker::User, "A detective in Mars colony");
        conversation.push(Speaker::Coach, "What does she fear?");
        conversation
    }

    #[test]
    fn coach_reply_embeds_transcript() {
        let prompt = coach_reply(&sample_conversation());
        assert_eq!(prompt.system, WORKSHOP_COACH_SYSTEM);
        assert!(prompt.body.starts_with("Continue the workshop conversation."));
        assert!(prompt.body.ends_with(
            "Conversation so far:\nUser: A detective in Mars colony\nCoach: What does she fear?"
        ));
    }

    #[test]
    fn workshop_report_uses_report_instruction() {
        let prompt = workshop_report(&sample_conversation());
        assert_eq!(prompt.system, WORKSHOP_REPORT_SYSTEM);
        assert!(prompt.body.starts_with("Conversation transcript:\nUser: A detective"));
    }

    #[test]
    fn style_profile_defaults_missing_author() {
        let prompt = style_profile("", "terse, present tense");
        assert_eq!(
            prompt.body,
            "Author inspiration: Not specified\nStyle notes: terse, present tense"
        );

        let prompt = style_profile("Le Guin", "quiet");
        assert_eq!(prompt.body, "Author inspiration: Le Guin\nStyle notes: quiet");
        assert_eq!(prompt.system, STYLE_PROFILE_SYSTEM);
    }

    #[test]
    fn checks_put_reference_before_text() {
        let prompt = fact_check("Sky is blue.", "The sky is green.");
        assert_eq!(
            prompt.body,
            "Fact library:\nSky is blue.\n\nText to verify:\nThe sky is green."
        );
        assert_eq!(prompt.system, FACT_CHECK_SYSTEM);

        let prompt = style_check("Short sentences.", "A long one.");
        assert_eq!(
            prompt.body,
            "Style profile:\nShort sentences.\n\nText to review:\nA long one."
        );

        let prompt = consistency_check("Hero is left-handed.", "He wrote with his right.");
        assert_eq!(
            prompt.body,
            "Idea workshop report:\nHero is left-handed.\n\nText to review:\nHe wrote with his right."
        );
        assert_eq!(prompt.system, CONSISTENCY_CHECK_SYSTEM);
    }

    #[test]
    fn every_instruction_is_distinct() {
        let all = [
            WORKSHOP_COACH_SYSTEM,
            WORKSHOP_REPORT_SYSTEM,
            STYLE_PROFILE_SYSTEM,
            FACT_CHECK_SYSTEM,
            STYLE_CHECK_SYSTEM,
            CONSISTENCY_CHECK_SYSTEM,
        ];
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }
}
