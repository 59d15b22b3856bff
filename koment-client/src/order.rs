use std::cmp::Reverse;

use crate::api::{Comment, Filter};

pub trait FilterExt {
    fn sort(&self, comments: &mut [&Comment]);
}

impl FilterExt for Filter {
    /// Stable, so that comments that compare equal keep their relative order
    fn sort(&self, comments: &mut [&Comment]) {
        match self {
            Filter::Latest => comments.sort_by_key(|c| Reverse(c.date)),
            Filter::MostLiked => comments.sort_by_key(|c| Reverse(c.reactions.likes)),
            Filter::Unsorted => (),
        }
    }
}
