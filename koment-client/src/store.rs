use crate::{
    api::{is_blank, Comment, CommentId, Filter, Reaction, Reactions, Reply, ReplyId, Target},
    Clock, FilterExt, SystemClock,
};

/// All the comments of a page, in the order they were posted
///
/// Nothing in here ever fails: blank text and unknown ids are ignored, and
/// reported only through the return values.
#[derive(Clone, Debug)]
pub struct CommentStore<C = SystemClock> {
    comments: Vec<Comment>,
    filter: Filter,
    clock: C,
}

impl CommentStore<SystemClock> {
    pub fn new() -> CommentStore<SystemClock> {
        CommentStore::with_clock(SystemClock)
    }
}

impl Default for CommentStore<SystemClock> {
    fn default() -> CommentStore<SystemClock> {
        CommentStore::new()
    }
}

impl<C: Clock> CommentStore<C> {
    pub fn with_clock(clock: C) -> CommentStore<C> {
        CommentStore {
            comments: Vec::new(),
            filter: Filter::default(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == *id)
    }

    fn comment_mut(&mut self, id: &CommentId) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == *id)
    }

    pub fn reply(&self, parent: &CommentId, id: &ReplyId) -> Option<&Reply> {
        self.comment(parent).and_then(|c| c.reply(id))
    }

    /// Comments in insertion order, whatever the current filter
    pub fn stored(&self) -> &[Comment] {
        &self.comments
    }

    pub fn add_comment(&mut self, raw_text: &str) -> Option<CommentId> {
        if is_blank(raw_text) {
            tracing::trace!("ignoring blank comment");
            return None;
        }
        let comment = Comment::new(String::from(raw_text), self.clock.now());
        let id = comment.id;
        tracing::debug!(?id, date = %comment.date, "adding comment");
        self.comments.push(comment);
        Some(id)
    }

    /// Also drops all the replies. Returns whether there was anything to delete
    pub fn delete_comment(&mut self, id: &CommentId) -> bool {
        let len_before = self.comments.len();
        self.comments.retain(|c| c.id != *id);
        let deleted = self.comments.len() != len_before;
        if deleted {
            tracing::debug!(?id, "deleted comment");
        } else {
            tracing::trace!(?id, "ignoring deletion of unknown comment");
        }
        deleted
    }

    pub fn add_reply(&mut self, parent: &CommentId, raw_text: &str) -> Option<ReplyId> {
        if is_blank(raw_text) {
            tracing::trace!(?parent, "ignoring blank reply");
            return None;
        }
        let date = self.clock.now();
        let Some(comment) = self.comment_mut(parent) else {
            tracing::trace!(?parent, "ignoring reply to unknown comment");
            return None;
        };
        let reply = Reply::new(String::from(raw_text), date);
        let id = reply.id;
        tracing::debug!(?parent, ?id, "adding reply");
        comment.replies.push(reply);
        Some(id)
    }

    fn reactions_mut(&mut self, target: &Target) -> Option<&mut Reactions> {
        match target {
            Target::Comment(id) => self.comment_mut(id).map(|c| &mut c.reactions),
            Target::Reply { parent, id } => self
                .comment_mut(parent)
                .and_then(|c| c.reply_mut(id))
                .map(|r| &mut r.reactions),
        }
    }

    /// Returns whether the target was found
    pub fn react(&mut self, target: Target, reaction: Reaction) -> bool {
        match self.reactions_mut(&target) {
            Some(reactions) => {
                reactions.react(reaction);
                tracing::debug!(
                    ?target,
                    ?reaction,
                    state = ?reactions.state,
                    likes = reactions.likes,
                    dislikes = reactions.dislikes,
                    "reacted"
                );
                true
            }
            None => {
                tracing::trace!(?target, ?reaction, "ignoring reaction to unknown target");
                false
            }
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        tracing::debug!(%filter, "setting filter");
        self.filter = filter;
    }

    /// Top-level comments in display order for `filter`. Replies keep their
    /// own order
    pub fn list_comments(&self, filter: Filter) -> Vec<&Comment> {
        let mut res = self.comments.iter().collect::<Vec<_>>();
        filter.sort(&mut res);
        res
    }

    /// Top-level comments in display order for the current filter
    pub fn comments(&self) -> Vec<&Comment> {
        self.list_comments(self.filter)
    }
}
