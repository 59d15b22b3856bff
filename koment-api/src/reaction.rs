use crate::{CommentId, ReplyId};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

/// What the current user thinks of a comment or reply
///
/// A single state rather than two booleans, so that being both liked and
/// disliked is not representable.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionState {
    #[default]
    Neutral,
    Liked,
    Disliked,
}

impl ReactionState {
    /// Reacting the same way twice undoes the reaction, reacting the other way
    /// switches to it
    pub fn apply(self, r: Reaction) -> ReactionState {
        match (self, r) {
            (ReactionState::Liked, Reaction::Like) => ReactionState::Neutral,
            (ReactionState::Disliked, Reaction::Dislike) => ReactionState::Neutral,
            (_, Reaction::Like) => ReactionState::Liked,
            (_, Reaction::Dislike) => ReactionState::Disliked,
        }
    }

    pub fn is_liked(&self) -> bool {
        *self == ReactionState::Liked
    }

    pub fn is_disliked(&self) -> bool {
        *self == ReactionState::Disliked
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reactions {
    pub likes: u64,
    pub dislikes: u64,
    pub state: ReactionState,
}

impl Reactions {
    pub fn is_liked(&self) -> bool {
        self.state.is_liked()
    }

    pub fn is_disliked(&self) -> bool {
        self.state.is_disliked()
    }

    /// Counts only move when the state enters or leaves liked/disliked
    pub fn react(&mut self, r: Reaction) {
        let old = self.state;
        let new = old.apply(r);
        if old.is_liked() && !new.is_liked() {
            self.likes = self.likes.saturating_sub(1);
        }
        if old.is_disliked() && !new.is_disliked() {
            self.dislikes = self.dislikes.saturating_sub(1);
        }
        if new.is_liked() && !old.is_liked() {
            self.likes += 1;
        }
        if new.is_disliked() && !old.is_disliked() {
            self.dislikes += 1;
        }
        self.state = new;
    }
}

/// Something that can be reacted to
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Target {
    Comment(CommentId),
    Reply { parent: CommentId, id: ReplyId },
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::ReactionState::*;

    #[test]
    fn transition_table() {
        assert_eq!(Neutral.apply(Reaction::Like), Liked);
        assert_eq!(Neutral.apply(Reaction::Dislike), Disliked);
        assert_eq!(Liked.apply(Reaction::Like), Neutral);
        assert_eq!(Liked.apply(Reaction::Dislike), Disliked);
        assert_eq!(Disliked.apply(Reaction::Dislike), Neutral);
        assert_eq!(Disliked.apply(Reaction::Like), Liked);
    }

    #[test]
    fn like_twice_round_trips() {
        let mut r = Reactions::default();
        r.react(Reaction::Like);
        assert_eq!(r.likes, 1);
        assert!(r.is_liked());
        r.react(Reaction::Like);
        assert_eq!(r, Reactions::default());
    }

    #[test]
    fn like_while_disliked_is_a_single_step() {
        let mut r = Reactions::default();
        r.react(Reaction::Dislike);
        assert_eq!((r.likes, r.dislikes), (0, 1));
        r.react(Reaction::Like);
        assert_eq!((r.likes, r.dislikes), (1, 0));
        assert!(r.is_liked());
        assert!(!r.is_disliked());
    }

    #[test]
    fn dislike_while_liked_is_a_single_step() {
        let mut r = Reactions::default();
        r.react(Reaction::Like);
        r.react(Reaction::Dislike);
        assert_eq!((r.likes, r.dislikes), (0, 1));
        assert!(r.is_disliked());
        assert!(!r.is_liked());
    }

    #[test]
    fn unliking_keeps_other_counts() {
        let mut r = Reactions {
            likes: 5,
            dislikes: 3,
            state: Liked,
        };
        r.react(Reaction::Like);
        assert_eq!(
            r,
            Reactions {
                likes: 4,
                dislikes: 3,
                state: Neutral,
            }
        );
    }

    #[test]
    fn counts_never_underflow() {
        // Inconsistent state, eg. from a hand-written dump
        let mut r = Reactions {
            likes: 0,
            dislikes: 0,
            state: Liked,
        };
        r.react(Reaction::Dislike);
        assert_eq!((r.likes, r.dislikes), (0, 1));
    }
}
