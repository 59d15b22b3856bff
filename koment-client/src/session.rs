use std::collections::HashMap;

use crate::{
    api::{Comment, CommentId, Filter, Reaction, ReplyId, Target},
    Clock, CommentStore, EmojiSource, SystemClock,
};

/// Which text buffer an emoji picker writes into
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EmojiTarget {
    Compose,
    Reply(CommentId),
}

/// A comment store, plus the state of the inputs used to fill it: the compose
/// box, one reply box per comment, and the emoji pickers
#[derive(Debug)]
pub struct Session<C = SystemClock> {
    store: CommentStore<C>,
    compose: String,
    compose_picker: bool,
    reply_texts: HashMap<CommentId, String>,
    replying_to: Option<CommentId>,
    reply_picker: Option<CommentId>,
}

impl Session<SystemClock> {
    pub fn new() -> Session<SystemClock> {
        Session::with_store(CommentStore::new())
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Session<SystemClock> {
        Session::new()
    }
}

impl<C: Clock> Session<C> {
    pub fn with_store(store: CommentStore<C>) -> Session<C> {
        Session {
            store,
            compose: String::new(),
            compose_picker: false,
            reply_texts: HashMap::new(),
            replying_to: None,
            reply_picker: None,
        }
    }

    pub fn store(&self) -> &CommentStore<C> {
        &self.store
    }

    pub fn compose(&self) -> &str {
        &self.compose
    }

    pub fn set_compose(&mut self, text: String) {
        self.compose = text;
    }

    /// Posts the compose buffer as a new comment, then empties it
    pub fn submit(&mut self) -> Option<CommentId> {
        let id = self.store.add_comment(&self.compose)?;
        self.compose.clear();
        self.compose_picker = false;
        Some(id)
    }

    pub fn replying_to(&self) -> Option<CommentId> {
        self.replying_to
    }

    /// Opens the reply box of `parent`, or closes it if it already was open
    pub fn toggle_reply(&mut self, parent: CommentId) {
        if self.store.comment(&parent).is_none() {
            tracing::trace!(?parent, "ignoring reply box for unknown comment");
            return;
        }
        self.replying_to = match self.replying_to {
            Some(p) if p == parent => None,
            _ => Some(parent),
        };
    }

    pub fn reply_text(&self, parent: &CommentId) -> &str {
        self.reply_texts.get(parent).map(String::as_str).unwrap_or("")
    }

    pub fn set_reply_text(&mut self, parent: CommentId, text: String) {
        if self.store.comment(&parent).is_none() {
            tracing::trace!(?parent, "ignoring reply text for unknown comment");
            return;
        }
        self.reply_texts.insert(parent, text);
    }

    /// Posts the reply buffer of `parent` as a reply to it, then empties the
    /// buffer and closes the reply box and its emoji picker
    pub fn submit_reply(&mut self, parent: CommentId) -> Option<ReplyId> {
        let text = self.reply_texts.get(&parent)?;
        let id = self.store.add_reply(&parent, text)?;
        self.reply_texts.remove(&parent);
        self.replying_to = None;
        self.reply_picker = None;
        Some(id)
    }

    pub fn is_picker_open(&self, target: EmojiTarget) -> bool {
        match target {
            EmojiTarget::Compose => self.compose_picker,
            EmojiTarget::Reply(p) => self.reply_picker == Some(p),
        }
    }

    /// There is at most one open reply picker, opening another one closes it
    pub fn toggle_emoji_picker(&mut self, target: EmojiTarget) {
        match target {
            EmojiTarget::Compose => self.compose_picker = !self.compose_picker,
            EmojiTarget::Reply(parent) => {
                if self.store.comment(&parent).is_none() {
                    tracing::trace!(?parent, "ignoring emoji picker for unknown comment");
                    return;
                }
                self.reply_picker = match self.reply_picker {
                    Some(p) if p == parent => None,
                    _ => Some(parent),
                };
            }
        }
    }

    /// Appends the emoji `source` gives for `selection` to the buffer of
    /// `target`. Does nothing unless that picker is open
    pub fn pick_emoji<E: EmojiSource + ?Sized>(
        &mut self,
        target: EmojiTarget,
        source: &E,
        selection: &str,
    ) -> bool {
        if !self.is_picker_open(target) {
            tracing::trace!(?target, "ignoring emoji pick with closed picker");
            return false;
        }
        let Some(emoji) = source.pick(selection) else {
            tracing::trace!(?target, selection, "emoji source picked nothing");
            return false;
        };
        match target {
            EmojiTarget::Compose => self.compose.push_str(&emoji),
            EmojiTarget::Reply(parent) => self
                .reply_texts
                .entry(parent)
                .or_default()
                .push_str(&emoji),
        }
        true
    }

    pub fn react(&mut self, target: Target, reaction: Reaction) -> bool {
        self.store.react(target, reaction)
    }

    /// Deletes the comment along with any input state attached to it
    pub fn delete(&mut self, id: &CommentId) -> bool {
        self.reply_texts.remove(id);
        if self.replying_to == Some(*id) {
            self.replying_to = None;
        }
        if self.reply_picker == Some(*id) {
            self.reply_picker = None;
        }
        self.store.delete_comment(id)
    }

    pub fn filter(&self) -> Filter {
        self.store.filter()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter)
    }

    pub fn comments(&self) -> Vec<&Comment> {
        self.store.comments()
    }
}
