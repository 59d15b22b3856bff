use crate::{Reactions, Time, STUB_UUID};

use uuid::Uuid;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn generate() -> CommentId {
        CommentId(Uuid::new_v4())
    }

    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ReplyId(pub Uuid);

impl ReplyId {
    pub fn generate() -> ReplyId {
        ReplyId(Uuid::new_v4())
    }

    pub fn stub() -> ReplyId {
        ReplyId(STUB_UUID)
    }
}

/// Returns true if `text` would not make a comment: empty or only whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Upper-cased first character of the trimmed text, or an empty string for
/// blank text
///
/// Some characters upper-case to more than one character (eg. `ß` gives `SS`),
/// hence the `String`.
pub fn avatar_for(text: &str) -> String {
    text.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reply {
    pub id: ReplyId,

    /// Raw text as typed, not trimmed
    pub text: String,
    pub avatar: String,
    pub date: Time,

    #[serde(flatten)]
    pub reactions: Reactions,
}

impl Reply {
    pub fn new(text: String, date: Time) -> Reply {
        Reply {
            id: ReplyId::generate(),
            avatar: avatar_for(&text),
            text,
            date,
            reactions: Reactions::default(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,

    /// Raw text as typed, not trimmed
    pub text: String,
    pub avatar: String,
    pub date: Time,

    #[serde(flatten)]
    pub reactions: Reactions,

    /// Replies in submission order
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn new(text: String, date: Time) -> Comment {
        Comment {
            id: CommentId::generate(),
            avatar: avatar_for(&text),
            text,
            date,
            reactions: Reactions::default(),
            replies: Vec::new(),
        }
    }

    pub fn reply(&self, id: &ReplyId) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == *id)
    }

    pub fn reply_mut(&mut self, id: &ReplyId) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == *id)
    }
}
