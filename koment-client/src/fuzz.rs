#![cfg(test)]

use crate::{
    api::{Comment, CommentId, Filter, Reaction, Reactions, ReplyId, Target},
    clock::StepClock,
    CommentStore,
};

/// (operation, index, index-or-reaction, text)
type Op = (u8, u8, u8, String);

fn reaction(b: u8) -> Reaction {
    match b % 2 {
        0 => Reaction::Like,
        _ => Reaction::Dislike,
    }
}

fn filter(b: u8) -> Filter {
    match b % 3 {
        0 => Filter::Latest,
        1 => Filter::MostLiked,
        _ => Filter::Unsorted,
    }
}

/// Reference list of what the store should contain, in insertion order
type Shadow = Vec<(CommentId, Vec<ReplyId>)>;

fn apply(store: &mut CommentStore<StepClock>, shadow: &mut Shadow, (op, a, b, text): Op) {
    let pick_comment = |shadow: &Shadow, a: u8| -> Option<usize> {
        (!shadow.is_empty()).then(|| a as usize % shadow.len())
    };
    match op % 6 {
        0 => {
            let res = store.add_comment(&text);
            assert_eq!(res.is_some(), !text.trim().is_empty());
            if let Some(id) = res {
                shadow.push((id, Vec::new()));
            }
        }
        1 => match pick_comment(shadow, a) {
            None => assert_eq!(store.add_reply(&CommentId::stub(), &text), None),
            Some(i) => {
                let res = store.add_reply(&shadow[i].0, &text);
                assert_eq!(res.is_some(), !text.trim().is_empty());
                if let Some(id) = res {
                    shadow[i].1.push(id);
                }
            }
        },
        2 => match pick_comment(shadow, a) {
            None => assert!(!store.react(Target::Comment(CommentId::stub()), reaction(b))),
            Some(i) => assert!(store.react(Target::Comment(shadow[i].0), reaction(b))),
        },
        3 => {
            let Some(i) = pick_comment(shadow, a) else {
                return;
            };
            let (parent, replies) = &shadow[i];
            if replies.is_empty() {
                let target = Target::Reply {
                    parent: *parent,
                    id: ReplyId::stub(),
                };
                assert!(!store.react(target, reaction(b)));
            } else {
                let id = replies[(b / 2) as usize % replies.len()];
                let target = Target::Reply {
                    parent: *parent,
                    id,
                };
                assert!(store.react(target, reaction(b)));
            }
        }
        4 => match pick_comment(shadow, a) {
            None => assert!(!store.delete_comment(&CommentId::stub())),
            Some(i) => {
                let (id, _) = shadow.remove(i);
                assert!(store.delete_comment(&id));
                assert!(!store.delete_comment(&id));
            }
        },
        _ => store.set_filter(filter(a)),
    }
}

fn check_reactions(r: &Reactions) {
    assert!(!(r.is_liked() && r.is_disliked()));
    // single user: each count is exactly the current flag
    assert_eq!(r.likes, r.is_liked() as u64);
    assert_eq!(r.dislikes, r.is_disliked() as u64);
}

fn check(store: &CommentStore<StepClock>, shadow: &Shadow) {
    let stored = store.stored();
    assert_eq!(
        stored.iter().map(|c| c.id).collect::<Vec<_>>(),
        shadow.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
    );
    for (c, (_, replies)) in stored.iter().zip(shadow.iter()) {
        check_reactions(&c.reactions);
        assert_eq!(&c.replies.iter().map(|r| r.id).collect::<Vec<_>>(), replies);
        for r in c.replies.iter() {
            check_reactions(&r.reactions);
        }
    }

    let position = |c: &Comment| stored.iter().position(|s| s.id == c.id).unwrap();
    for f in [Filter::Latest, Filter::MostLiked, Filter::Unsorted] {
        let view = store.list_comments(f);
        let mut positions = view.iter().map(|c| position(*c)).collect::<Vec<_>>();
        for w in view.windows(2) {
            match f {
                Filter::Latest => assert!(w[0].date >= w[1].date),
                Filter::MostLiked => {
                    assert!(w[0].reactions.likes >= w[1].reactions.likes);
                    if w[0].reactions.likes == w[1].reactions.likes {
                        assert!(position(w[0]) < position(w[1]));
                    }
                }
                Filter::Unsorted => assert!(position(w[0]) < position(w[1])),
            }
        }
        positions.sort();
        assert_eq!(positions, (0..stored.len()).collect::<Vec<_>>());
    }
}

#[test]
fn random_operations_keep_invariants() {
    bolero::check!()
        .with_type::<Vec<Op>>()
        .cloned()
        .for_each(|ops| {
            let mut store = CommentStore::with_clock(StepClock::new());
            let mut shadow = Shadow::new();
            for op in ops {
                apply(&mut store, &mut shadow, op);
                check(&store, &shadow);
            }
        })
}
