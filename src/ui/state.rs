use crate::common::{ChatMessage, UserProfile};

use super::errors::{FieldAction, FieldErrors};

pub const USER_MESSAGE_FIELD: &str = "userMessage";
pub const USER_MESSAGE_REQUIRED: &str = "Message is a required field";
pub const ANONYMOUS_SENDER: &str = "Not Identified";

/// Local state of the chat page. Lives only while the view is mounted.
#[derive(Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Uncontrolled draft buffer owned by the text field; read on submit.
    pub draft: String,
    pub errors: FieldErrors,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            errors: FieldErrors::new([(USER_MESSAGE_FIELD, USER_MESSAGE_REQUIRED)]),
        }
    }

    /// Appends the draft as a new message when it is non-empty, then marks
    /// `userMessage` invalid whether or not anything was sent.
    pub fn submit_draft(&mut self, user: Option<&UserProfile>) {
        if !self.draft.is_empty() {
            let from = user
                .and_then(|user| user.name.as_deref())
                .filter(|name| !name.is_empty())
                .unwrap_or(ANONYMOUS_SENDER);
            let text = std::mem::take(&mut self.draft);
            self.messages.push(ChatMessage::new(from, text));
        }

        self.errors.dispatch(FieldAction::invalid(USER_MESSAGE_FIELD));
    }

    pub fn clear_draft_error(&mut self) {
        self.errors.dispatch(FieldAction::valid(USER_MESSAGE_FIELD));
    }

    pub fn draft_error(&self) -> Option<&str> {
        self.errors.error_for(USER_MESSAGE_FIELD)
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{ANONYMOUS_SENDER, ChatState, USER_MESSAGE_REQUIRED};
    use crate::common::UserProfile;

    #[test]
    fn submit_appends_message_and_clears_draft() {
        let user = UserProfile::named("octocat");
        let mut state = ChatState::new();
        state.draft = "first".to_string();
        state.submit_draft(Some(&user));
        state.draft = "second".to_string();
        state.submit_draft(Some(&user));

        assert_eq!(state.messages.len(), 2);
        let last = state.messages.last().expect("message should be appended");
        assert_eq!(last.text, "second");
        assert_eq!(last.from, "octocat");
        assert_eq!(state.messages[0].text, "first");
        assert!(state.draft.is_empty());
    }

    #[test]
    fn submit_without_user_uses_fallback_sender() {
        let mut state = ChatState::new();
        state.draft = "hi".to_string();
        state.submit_draft(None);
        assert_eq!(state.messages[0].from, ANONYMOUS_SENDER);

        let nameless = UserProfile::default();
        state.draft = "again".to_string();
        state.submit_draft(Some(&nameless));
        assert_eq!(state.messages[1].from, ANONYMOUS_SENDER);
    }

    #[test]
    fn empty_submit_appends_nothing() {
        let mut state = ChatState::new();
        state.submit_draft(None);

        assert!(state.messages.is_empty());
        assert!(state.draft.is_empty());
        assert_eq!(state.draft_error(), Some(USER_MESSAGE_REQUIRED));
    }

    #[test]
    fn whitespace_draft_is_sent_as_typed() {
        let mut state = ChatState::new();
        state.draft = "  ".to_string();
        state.submit_draft(None);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].text, "  ");
    }

    #[test]
    fn successful_submit_still_marks_draft_invalid() {
        let mut state = ChatState::new();
        state.draft = "hello".to_string();
        state.submit_draft(None);
        assert_eq!(state.draft_error(), Some(USER_MESSAGE_REQUIRED));
    }

    #[test]
    fn editing_clears_draft_error() {
        let mut state = ChatState::new();
        state.submit_draft(None);
        assert!(state.draft_error().is_some());

        state.clear_draft_error();
        assert!(state.draft_error().is_none());
    }

    #[test]
    fn default_state_tracks_draft_field() {
        let mut state = ChatState::default();
        assert!(state.messages.is_empty());
        assert!(state.draft_error().is_none());

        state.submit_draft(None);
        assert_eq!(state.draft_error(), Some(USER_MESSAGE_REQUIRED));
    }

    #[test]
    fn message_ids_are_unique() {
        let mut state = ChatState::new();
        for index in 0..50 {
            state.draft = format!("message {index}");
            state.submit_draft(None);
        }

        let ids: HashSet<_> = state.messages.iter().map(|message| &message.id).collect();
        assert_eq!(ids.len(), 50);
    }
}
