mod clock;
pub use clock::{Clock, SystemClock};

mod emoji;
pub use emoji::{EmojiSource, Shortcodes};

mod order;
pub use order::FilterExt;

mod session;
pub use session::{EmojiTarget, Session};

mod store;
pub use store::CommentStore;

mod fuzz;

pub mod api {
    pub use koment_api::*;
}

