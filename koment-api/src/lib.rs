use chrono::Utc;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

mod comment;
pub use comment::{avatar_for, is_blank, Comment, CommentId, Reply, ReplyId};

mod filter;
pub use filter::Filter;

mod reaction;
pub use reaction::{Reaction, ReactionState, Reactions, Target};
