//! Prints a random koment-ctl script on stdout
//!
//! The script is played against a local session while generated, so that all
//! the positions it uses point to something.

use koment_client::{
    api::{Filter, Reaction, Target},
    EmojiTarget, Session, Shortcodes,
};
use rand::{seq::SliceRandom, Rng};

const NUM_COMMANDS: usize = 500;
const COMMENT_WORD_COUNT: usize = 12;
const REPLY_WORD_COUNT: usize = 6;

const EMOJIS: &[&str] = &[":smile:", ":+1:", ":fire:", ":tada:", "🚀", ":nope:"];
const FILTERS: &[&str] = &["latest", "most-liked", "unsorted"];

fn gen_text(rng: &mut impl Rng, words: usize) -> String {
    // Sometimes blank, to check that blank posts are ignored
    if rng.gen_ratio(1, 20) {
        return String::from("   ");
    }
    lipsum::lipsum_words(rng.gen_range(1..=words))
}

fn emit(line: String) {
    println!("{line}");
}

fn main() {
    let mut rng = rand::thread_rng();
    let mut session = Session::new();

    emit(String::from("# generated by generate-session"));
    for _ in 0..NUM_COMMANDS {
        let view = session.comments();
        let num_comments = view.len();
        let comment = (num_comments > 0).then(|| rng.gen_range(0..num_comments));
        let ids = view.iter().map(|c| (c.id, c.replies.len())).collect::<Vec<_>>();

        match (rng.gen_range(0..10), comment) {
            (0..=2, _) | (_, None) => {
                let text = gen_text(&mut rng, COMMENT_WORD_COUNT);
                if rng.gen_bool(0.2) {
                    let emoji = EMOJIS.choose(&mut rng).copied().unwrap_or(":smile:");
                    emit(format!("write {text} "));
                    emit(String::from("emoji"));
                    emit(format!("pick {emoji}"));
                    session.set_compose(format!("{text} "));
                    session.toggle_emoji_picker(EmojiTarget::Compose);
                    session.pick_emoji(EmojiTarget::Compose, &Shortcodes, emoji);
                    emit(String::from("post"));
                } else {
                    emit(format!("post {text}"));
                    session.set_compose(text);
                }
                session.submit();
            }
            (3..=4, Some(i)) => {
                let (parent, _) = ids[i];
                let text = gen_text(&mut rng, REPLY_WORD_COUNT);
                emit(format!("reply {}", i + 1));
                emit(format!("reply-write {} {text}", i + 1));
                emit(format!("send {}", i + 1));
                session.toggle_reply(parent);
                session.set_reply_text(parent, text);
                session.submit_reply(parent);
            }
            (5..=7, Some(i)) => {
                let (parent, num_replies) = ids[i];
                let (word, reaction) = match rng.gen_bool(0.7) {
                    true => ("like", Reaction::Like),
                    false => ("dislike", Reaction::Dislike),
                };
                let target = match num_replies > 0 && rng.gen_bool(0.5) {
                    true => {
                        let r = rng.gen_range(0..num_replies);
                        emit(format!("{word} {}.{}", i + 1, r + 1));
                        match session.store().comment(&parent) {
                            Some(c) => Target::Reply {
                                parent,
                                id: c.replies[r].id,
                            },
                            None => continue,
                        }
                    }
                    false => {
                        emit(format!("{word} {}", i + 1));
                        Target::Comment(parent)
                    }
                };
                session.react(target, reaction);
            }
            (8, Some(i)) => {
                let (id, _) = ids[i];
                emit(format!("delete {}", i + 1));
                session.delete(&id);
            }
            _ => {
                let filter = FILTERS.choose(&mut rng).copied().unwrap_or("latest");
                emit(format!("sort {filter}"));
                session.set_filter(filter.parse().unwrap_or(Filter::Unsorted));
            }
        }
    }
    emit(String::from("show"));
}
