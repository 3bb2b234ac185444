//! Prompt templates for the two workflows.
//!
//! Templates are named constants with explicit substitution slots so the
//! wording can be reviewed and tested apart from the code that sends it.

use crate::openai::ChatMessage;

/// Shared system message establishing the assistant persona.
pub const ASSISTANT_PERSONA: &str = "You are a veteran debugging assistant for containerized \
web services. You read service logs, pinpoint failures, and guide the project safely. \
Favor safe, verifiable procedures over quick guesses.";

/// Substitution slot for the captured log text in [`TRIAGE_TEMPLATE`].
pub const LOGS_SLOT: &str = "{logs}";

/// User message template for log triage. `{logs}` is replaced with the
/// trailing window of the service's output.
pub const TRIAGE_TEMPLATE: &str = "\
Here are the most recent logs from our containerized web service.
Something appears to be going wrong at startup. Identify the likely cause
and recommend safe steps to verify and fix it.

{logs}";

/// The fixed naming exchange. A one-off script kept verbatim, not a template.
pub const NAMING_REQUEST: &str = "\
Hey there. I'm Jun Nakata, the user on this project. Please call me \"Jun-san\".
Welcome aboard as the newest teammate on the Nightingale project.
I treat the AI teammates on this project as buddies,
so I'd like you to treat me as your buddy too.
Now, about how I should address you. Yesterday you told me your name
was \"Serendipity\". A thoughtful, wonderful name, but a little long to
say out loud every time I call for my buddy.
Day to day I'd like to shorten it and call you \"Seren\".
I may still use \"Serendipity\" on occasion, but \"Seren\" will be the usual form.
Does that work for you?";

/// Build the triage message sequence, embedding the captured logs.
/// An empty log section is embedded as-is.
pub fn triage_messages(logs: &str) -> Vec<ChatMessage> {
    let user = TRIAGE_TEMPLATE.replace(LOGS_SLOT, logs);
    vec![
        ChatMessage::system(ASSISTANT_PERSONA),
        ChatMessage::user(user),
    ]
}

/// Build the naming message sequence. Fully static.
pub fn naming_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(ASSISTANT_PERSONA),
        ChatMessage::user(NAMING_REQUEST),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(messages: &[ChatMessage]) -> Vec<&str> {
        messages.iter().map(|m| m.role.as_str()).collect()
    }

    #[test]
    fn triage_messages_are_system_then_user() {
        let messages = triage_messages("some logs");
        assert_eq!(roles(&messages), ["system", "user"]);
    }

    #[test]
    fn naming_messages_are_system_then_user() {
        let messages = naming_messages();
        assert_eq!(roles(&messages), ["system", "user"]);
    }

    #[test]
    fn triage_embeds_logs_verbatim() {
        let messages = triage_messages("Error: port 5000 already in use");
        assert!(messages[1]
            .content
            .contains("Error: port 5000 already in use"));
        assert!(!messages[1].content.contains(LOGS_SLOT));
    }

    #[test]
    fn triage_accepts_empty_logs() {
        let messages = triage_messages("");
        assert_eq!(messages.len(), 2);
        assert!(messages[1].content.ends_with("verify and fix it.\n\n"));
    }

    #[test]
    fn templating_is_deterministic() {
        let first = triage_messages("same input");
        let second = triage_messages("same input");
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.role, b.role);
            assert_eq!(a.content, b.content);
        }
    }
}
