use std::collections::HashMap;

use lazy_static::lazy_static;

/// Turns a user's pick in an emoji picker into text to append to a buffer
pub trait EmojiSource {
    fn pick(&self, selection: &str) -> Option<String>;
}

impl<F> EmojiSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn pick(&self, selection: &str) -> Option<String> {
        self(selection)
    }
}

lazy_static! {
    static ref SHORTCODES: HashMap<&'static str, &'static str> = HashMap::from([
        ("smile", "😀"),
        ("grin", "😁"),
        ("joy", "😂"),
        ("wink", "😉"),
        ("heart_eyes", "😍"),
        ("thinking", "🤔"),
        ("cry", "😢"),
        ("angry", "😠"),
        ("+1", "👍"),
        ("thumbsup", "👍"),
        ("-1", "👎"),
        ("thumbsdown", "👎"),
        ("clap", "👏"),
        ("pray", "🙏"),
        ("heart", "❤️"),
        ("fire", "🔥"),
        ("tada", "🎉"),
        ("rocket", "🚀"),
        ("eyes", "👀"),
        ("speech_balloon", "💬"),
        ("clock", "🕒"),
    ]);
}

const VARIATION_SELECTOR_16: char = '\u{fe0f}';
const KEYCAP: char = '\u{20e3}';
const ZERO_WIDTH_JOINER: char = '\u{200d}';

fn is_pictographic(c: char) -> bool {
    matches!(c,
        '\u{1f000}'..='\u{1faff}'
        | '\u{2300}'..='\u{23ff}'
        | '\u{2600}'..='\u{27bf}'
        | '\u{2b00}'..='\u{2bff}')
}

/// Joiners, modifiers and tags that only appear inside an emoji sequence
fn is_emoji_component(c: char) -> bool {
    matches!(c,
        VARIATION_SELECTOR_16
        | KEYCAP
        | ZERO_WIDTH_JOINER
        | '\u{e0020}'..='\u{e007f}')
}

/// Whether `s` is made only of emoji sequences
///
/// A char that is neither pictographic nor a component is accepted only when
/// followed by VS16 or the keycap mark, as in `1️⃣` or `©️`.
fn is_raw_emoji(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    let mut has_emoji = false;
    while let Some(c) = chars.next() {
        if is_pictographic(c) || c == VARIATION_SELECTOR_16 || c == KEYCAP {
            has_emoji = true;
        } else if is_emoji_component(c) {
            // ok
        } else if matches!(chars.peek(), Some(&VARIATION_SELECTOR_16) | Some(&KEYCAP)) {
            has_emoji = true;
        } else {
            return false;
        }
    }
    has_emoji
}

/// Resolves `:name:` shortcodes, and lets raw emoji through as-is
#[derive(Clone, Copy, Debug, Default)]
pub struct Shortcodes;

impl EmojiSource for Shortcodes {
    fn pick(&self, selection: &str) -> Option<String> {
        let selection = selection.trim();
        if let Some(name) = selection
            .strip_prefix(':')
            .and_then(|s| s.strip_suffix(':'))
        {
            return SHORTCODES.get(name).map(|e| String::from(*e));
        }
        is_raw_emoji(selection).then(|| String::from(selection))
    }
}
