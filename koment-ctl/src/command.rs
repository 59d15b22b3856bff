use std::{fmt, str::FromStr};

use koment_client::api::{Filter, Reaction};

/// 1-based position of a comment, or of one of its replies, in the current view
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    pub comment: usize,
    pub reply: Option<usize>,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reply {
            None => write!(f, "{}", self.comment),
            Some(r) => write!(f, "{}.{}", self.comment, r),
        }
    }
}

impl FromStr for Position {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Position, CommandError> {
        let invalid = || CommandError::InvalidPosition(String::from(s));
        let parse = |n: &str| match n.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(invalid()),
        };
        Ok(match s.split_once('.') {
            None => Position {
                comment: parse(s)?,
                reply: None,
            },
            Some((c, r)) => Position {
                comment: parse(c)?,
                reply: Some(parse(r)?),
            },
        })
    }
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command {0:?}, try `help`")]
    Unknown(String),

    #[error("Missing {1} for command {0:?}")]
    MissingArgument(&'static str, &'static str),

    #[error("Invalid position {0:?}, expected eg. `3` or `3.2`")]
    InvalidPosition(String),

    #[error("Position {0} points to a reply, but {1:?} only applies to comments")]
    NotAComment(Position, &'static str),

    #[error("Nothing is shown at position {0}")]
    NothingAt(Position),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Replace the compose buffer
    Write(String),
    /// Post the compose buffer, or the given text directly
    Post(Option<String>),
    /// Toggle the emoji picker of the compose box, or of a reply box
    EmojiPicker(Option<usize>),
    /// Pick an emoji in the compose picker, or in a reply picker
    Pick(Option<usize>, String),
    /// Open or close the reply box of a comment
    Reply(usize),
    /// Replace the reply buffer of a comment
    ReplyWrite(usize, String),
    /// Post the reply buffer of a comment
    Send(usize),
    React(Position, Reaction),
    Delete(usize),
    Sort(Filter),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands (positions are as shown by `show`, eg. `3` or `3.2` for a reply):
  write <text>             replace the text being composed
  post [<text>]            post the composed text, or <text> directly
  emoji [<n>]              toggle the emoji picker of the compose box, or of reply box <n>
  pick [<n>] <emoji>       append an emoji (`:smile:` or a raw emoji) from an open picker
  reply <n>                open or close the reply box of comment <n>
  reply-write <n> <text>   replace the reply being written to comment <n>
  send <n>                 post the reply written to comment <n>
  like <pos>               like or un-like a comment or reply
  dislike <pos>            dislike or un-dislike a comment or reply
  delete <n>               delete comment <n> and its replies
  sort <latest|most-liked> change the display order
  show                     print the comments
  help                     print this message
  quit                     stop reading commands";

fn comment_position(cmd: &'static str, arg: &str) -> Result<usize, CommandError> {
    let pos = arg.trim().parse::<Position>()?;
    match pos.reply {
        None => Ok(pos.comment),
        Some(_) => Err(CommandError::NotAComment(pos, cmd)),
    }
}

fn required<'a>(
    cmd: &'static str,
    what: &'static str,
    arg: &'a str,
) -> Result<&'a str, CommandError> {
    match arg.trim() {
        "" => Err(CommandError::MissingArgument(cmd, what)),
        _ => Ok(arg),
    }
}

/// Splits off the first word, keeping the remainder verbatim after the single
/// separating space
fn split_word(s: &str) -> (&str, &str) {
    s.split_once(' ').unwrap_or((s, ""))
}

impl Command {
    /// Parses one script line. Blank lines and lines starting with `#` are
    /// not commands
    pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim_start().trim_end_matches(&['\r', '\n'][..]);
        if line.trim().is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Command, CommandError> {
        let (cmd, rest) = split_word(s);
        Ok(match cmd.trim() {
            "write" => Command::Write(String::from(rest)),
            "post" if rest.trim().is_empty() => Command::Post(None),
            "post" => Command::Post(Some(String::from(rest))),
            "emoji" if rest.trim().is_empty() => Command::EmojiPicker(None),
            "emoji" => Command::EmojiPicker(Some(comment_position("emoji", rest)?)),
            "pick" => match split_word(required("pick", "emoji", rest)?.trim()) {
                (emoji, "") => Command::Pick(None, String::from(emoji)),
                (n, emoji) => Command::Pick(
                    Some(comment_position("pick", n)?),
                    String::from(emoji.trim()),
                ),
            },
            "reply" => Command::Reply(comment_position(
                "reply",
                required("reply", "comment", rest)?,
            )?),
            "reply-write" => {
                let (n, text) = split_word(required("reply-write", "comment", rest)?.trim_start());
                Command::ReplyWrite(comment_position("reply-write", n)?, String::from(text))
            }
            "send" => Command::Send(comment_position(
                "send",
                required("send", "comment", rest)?,
            )?),
            "like" => Command::React(
                required("like", "position", rest)?.trim().parse()?,
                Reaction::Like,
            ),
            "dislike" => Command::React(
                required("dislike", "position", rest)?.trim().parse()?,
                Reaction::Dislike,
            ),
            "delete" => Command::Delete(comment_position(
                "delete",
                required("delete", "comment", rest)?,
            )?),
            "sort" => match required("sort", "order", rest)?.trim().parse::<Filter>() {
                Ok(f) => Command::Sort(f),
                Err(never) => match never {},
            },
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(String::from(other))),
        })
    }
}
