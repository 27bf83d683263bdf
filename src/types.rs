use time::OffsetDateTime;

/// Content shown for a bot reply that has not arrived yet.
pub const PLACEHOLDER: &str = "...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub pending: bool,
    pub created_at: Option<OffsetDateTime>,
}

/// Ordered view state for the chat list. Append-only, except that a pending
/// placeholder is resolved in place once its reply lands.
///
/// Placeholders are resolved by message id rather than by trailing position,
/// so two in-flight requests can finish in either order without swapping
/// their replies.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends the user's text as-is. Empty submissions are allowed and
    /// produce an empty user message.
    pub fn push_user(&mut self, content: impl Into<String>) -> u64 {
        self.push(Role::User, content.into(), false)
    }

    /// Appends the loading placeholder shown while a reply is awaited.
    pub fn push_placeholder(&mut self) -> u64 {
        self.push(Role::Bot, PLACEHOLDER.to_string(), true)
    }

    /// Replaces the content of the message with the given id and marks it
    /// resolved. Returns false if no message has that id.
    pub fn resolve(&mut self, id: u64, content: String) -> bool {
        match self.messages.iter_mut().find(|msg| msg.id == id) {
            Some(msg) => {
                msg.content = content;
                msg.pending = false;
                true
            }
            None => false,
        }
    }

    fn push(&mut self, role: Role, content: String, pending: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            pending,
            created_at: Some(OffsetDateTime::now_utc()),
        });
        id
    }
}
