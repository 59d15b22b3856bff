use std::io::{self, Write};

use chrono_tz::Tz;
use koment_client::{
    api::{Comment, Reactions, Reply},
    Clock, EmojiTarget, Session,
};

fn reactions(r: &Reactions) -> String {
    let mark = |on: bool| if on { "*" } else { "" };
    format!(
        "👍 {}{} 👎 {}{}",
        r.likes,
        mark(r.is_liked()),
        r.dislikes,
        mark(r.is_disliked()),
    )
}

fn reply(out: &mut impl Write, tz: &Tz, pos: String, r: &Reply) -> io::Result<()> {
    writeln!(out, "    {pos} [{}] {}", r.avatar, r.text)?;
    writeln!(
        out,
        "        {} | {}",
        r.date.with_timezone(tz).format("%c"),
        reactions(&r.reactions)
    )
}

fn comment(out: &mut impl Write, tz: &Tz, pos: usize, c: &Comment) -> io::Result<()> {
    writeln!(out, "{pos}. [{}] {}", c.avatar, c.text)?;
    writeln!(
        out,
        "    {} | {}",
        c.date.with_timezone(tz).format("%c"),
        reactions(&c.reactions)
    )?;
    for (i, r) in c.replies.iter().enumerate() {
        reply(out, tz, format!("{pos}.{}", i + 1), r)?;
    }
    Ok(())
}

fn picker(open: bool) -> &'static str {
    if open {
        " (emoji picker open)"
    } else {
        ""
    }
}

/// Plain-text view of the session, `*` marking the current user's reactions
pub fn session<C: Clock>(out: &mut impl Write, tz: &Tz, s: &Session<C>) -> io::Result<()> {
    let view = s.comments();
    writeln!(out, "{} comment(s), sorted by {}", view.len(), s.filter())?;
    for (i, c) in view.iter().enumerate() {
        comment(out, tz, i + 1, c)?;
    }
    if !s.compose().is_empty() || s.is_picker_open(EmojiTarget::Compose) {
        writeln!(
            out,
            "composing: {:?}{}",
            s.compose(),
            picker(s.is_picker_open(EmojiTarget::Compose))
        )?;
    }
    if let Some(parent) = s.replying_to() {
        if let Some(pos) = view.iter().position(|c| c.id == parent) {
            writeln!(
                out,
                "replying to {}: {:?}{}",
                pos + 1,
                s.reply_text(&parent),
                picker(s.is_picker_open(EmojiTarget::Reply(parent)))
            )?;
        }
    }
    Ok(())
}

pub fn session_json<C: Clock>(out: &mut impl Write, s: &Session<C>) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &s.comments())?;
    writeln!(out)?;
    Ok(())
}
