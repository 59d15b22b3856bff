use std::io::{BufRead, Write};

use anyhow::Context;
use chrono_tz::Tz;
use koment_client::{
    api::{CommentId, Target},
    Clock, EmojiTarget, Session, Shortcodes,
};

use crate::{
    command::{Command, CommandError, Position, HELP},
    render,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<C> {
    pub session: Session<C>,
    pub timezone: Tz,
    pub json: bool,
}

impl<C: Clock> App<C> {
    fn comment_at(&self, n: usize) -> Result<CommentId, CommandError> {
        let pos = Position {
            comment: n,
            reply: None,
        };
        self.session
            .comments()
            .get(n - 1)
            .map(|c| c.id)
            .ok_or(CommandError::NothingAt(pos))
    }

    fn target_at(&self, pos: Position) -> Result<Target, CommandError> {
        let view = self.session.comments();
        let comment = view
            .get(pos.comment - 1)
            .ok_or(CommandError::NothingAt(pos))?;
        Ok(match pos.reply {
            None => Target::Comment(comment.id),
            Some(r) => Target::Reply {
                parent: comment.id,
                id: comment
                    .replies
                    .get(r - 1)
                    .ok_or(CommandError::NothingAt(pos))?
                    .id,
            },
        })
    }

    fn picker_target(&self, n: Option<usize>) -> Result<EmojiTarget, CommandError> {
        Ok(match n {
            None => EmojiTarget::Compose,
            Some(n) => EmojiTarget::Reply(self.comment_at(n)?),
        })
    }

    /// Positions are resolved against the view as it is before running `cmd`
    pub fn run(&mut self, cmd: Command, out: &mut impl Write) -> anyhow::Result<Flow> {
        tracing::trace!(?cmd, "running command");
        match cmd {
            Command::Write(text) => self.session.set_compose(text),
            Command::Post(text) => {
                if let Some(text) = text {
                    self.session.set_compose(text);
                }
                if self.session.submit().is_none() {
                    writeln!(out, "nothing to post")?;
                }
            }
            Command::EmojiPicker(n) => {
                let target = self.picker_target(n)?;
                self.session.toggle_emoji_picker(target);
            }
            Command::Pick(n, selection) => {
                let target = self.picker_target(n)?;
                if !self.session.is_picker_open(target) {
                    writeln!(out, "that emoji picker is not open")?;
                } else if !self.session.pick_emoji(target, &Shortcodes, &selection) {
                    writeln!(out, "no emoji for {selection:?}")?;
                }
            }
            Command::Reply(n) => {
                let id = self.comment_at(n)?;
                self.session.toggle_reply(id);
            }
            Command::ReplyWrite(n, text) => {
                let id = self.comment_at(n)?;
                self.session.set_reply_text(id, text);
            }
            Command::Send(n) => {
                let id = self.comment_at(n)?;
                if self.session.submit_reply(id).is_none() {
                    writeln!(out, "nothing to send")?;
                }
            }
            Command::React(pos, reaction) => {
                let target = self.target_at(pos)?;
                self.session.react(target, reaction);
            }
            Command::Delete(n) => {
                let id = self.comment_at(n)?;
                self.session.delete(&id);
            }
            Command::Sort(filter) => self.session.set_filter(filter),
            Command::Show if self.json => render::session_json(out, &self.session)?,
            Command::Show => render::session(out, &self.timezone, &self.session)
                .context("rendering comments")?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Runs every line of `input`. Invalid lines are reported to `err` and
    /// skipped
    pub fn run_script(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> anyhow::Result<()> {
        for (lineno, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("reading line {}", lineno + 1))?;
            let res = Command::parse_line(&line)
                .map_err(anyhow::Error::from)
                .and_then(|cmd| match cmd {
                    Some(cmd) => self.run(cmd, out),
                    None => Ok(Flow::Continue),
                });
            match res {
                Ok(Flow::Continue) => (),
                Ok(Flow::Quit) => break,
                Err(e) => match e.downcast_ref::<CommandError>() {
                    Some(e) => {
                        tracing::debug!(lineno = lineno + 1, line = %line, "invalid command");
                        writeln!(err, "line {}: {e}", lineno + 1)?;
                    }
                    None => return Err(e),
                },
            }
        }
        out.flush().context("flushing output")
    }
}

#[cfg(test)]
mod tests {
    use koment_client::{api::Filter, CommentStore, SystemClock};

    use super::*;

    fn app() -> App<SystemClock> {
        App {
            session: Session::with_store(CommentStore::new()),
            timezone: Tz::UTC,
            json: false,
        }
    }

    fn run(app: &mut App<SystemClock>, script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        app.run_script(script.as_bytes(), &mut out, &mut err)
            .expect("running script");
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn hello_scenario() {
        let mut app = app();
        let (_, err) = run(
            &mut app,
            "post Hello\nlike 1\ndislike 1\nreply 1\nreply-write 1 Hi back\nsend 1\n",
        );
        assert_eq!(err, "");
        let view = app.session.comments();
        assert_eq!(view.len(), 1);
        let c = view[0];
        assert_eq!(c.avatar, "H");
        assert_eq!((c.reactions.likes, c.reactions.dislikes), (0, 1));
        assert!(c.reactions.is_disliked());
        assert_eq!(c.replies.len(), 1);
        assert_eq!(c.replies[0].text, "Hi back");
        assert_eq!(app.session.replying_to(), None);

        run(&mut app, "delete 1");
        assert!(app.session.comments().is_empty());
    }

    #[test]
    fn positions_follow_the_view() {
        let mut app = app();
        run(&mut app, "sort unsorted\npost first\npost second\nlike 2\nsort most-liked");
        assert_eq!(app.session.filter(), Filter::MostLiked);
        let texts = |app: &App<SystemClock>| {
            app.session
                .comments()
                .iter()
                .map(|c| c.text.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(texts(&app), vec!["second", "first"]);

        // position 1 is now "second", un-liking it restores insertion order
        run(&mut app, "like 1");
        assert_eq!(texts(&app), vec!["first", "second"]);
        assert!(app
            .session
            .comments()
            .iter()
            .all(|c| c.reactions.likes == 0));
    }

    #[test]
    fn emoji_in_compose_and_reply() {
        let mut app = app();
        let (out, err) = run(
            &mut app,
            "write Nice \npick :fire:\nemoji\npick :fire:\npost\n\
             emoji 1\npick 1 :tada:\nsend 1\n",
        );
        assert_eq!(err, "");
        assert_eq!(out, "that emoji picker is not open\n");
        let c = app.session.comments()[0];
        assert_eq!(c.text, "Nice 🔥");
        assert_eq!(c.replies[0].text, "🎉");
        assert!(!app.session.is_picker_open(EmojiTarget::Compose));
    }

    #[test]
    fn errors_do_not_stop_the_script() {
        let mut app = app();
        let (out, err) = run(
            &mut app,
            "# setup\nbogus\nlike 3\npost   \npost kept\nlike 1.1\nquit\npost never\n",
        );
        assert_eq!(out, "nothing to post\n");
        assert_eq!(
            err,
            "line 2: Unknown command \"bogus\", try `help`\n\
             line 3: Nothing is shown at position 3\n\
             line 6: Nothing is shown at position 1.1\n"
        );
        let view = app.session.comments();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].text, "kept");
    }

    #[test]
    fn show_text() {
        let mut app = app();
        let (out, _) = run(&mut app, "post hello\nlike 1\nwrite draft\nshow");
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("1 comment(s), sorted by latest"));
        assert_eq!(lines.next(), Some("1. [H] hello"));
        assert!(lines.next().unwrap().ends_with("| 👍 1* 👎 0"));
        assert_eq!(lines.next(), Some("composing: \"draft\""));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn show_json() {
        let mut app = app();
        app.json = true;
        let (out, _) = run(&mut app, "post hello\nshow");
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json[0]["text"], "hello");
        assert_eq!(json[0]["likes"], 0);
        assert_eq!(json[0]["replies"], serde_json::json!([]));
    }
}
