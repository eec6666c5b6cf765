use regex::Regex;
use std::sync::LazyLock;

/// `+1` / `-1`. Token boundaries are checked separately in [`is_token`].
static VOTE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]1").expect("vote marker pattern is valid"));

/// A marker is a vote only when it stands alone: it starts the text or
/// follows whitespace, `:` or `(`, and no digit follows the `1`.
/// `:+1`, `:+1:` and `(+1)` qualify; `+10`, `-100` and `2024-10-16` do not.
fn is_token(body: &str, start: usize, end: usize) -> bool {
    let opens = body[..start]
        .chars()
        .next_back()
        .map_or(true, |c| c.is_whitespace() || c == ':' || c == '(');
    let closes = body[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_ascii_digit());
    opens && closes
}

/// Which vote polarities occur in a comment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Votes {
    up: bool,
    down: bool,
}

impl Votes {
    fn scan(body: &str) -> Self {
        VOTE_MARKER
            .find_iter(body)
            .filter(|m| is_token(body, m.start(), m.end()))
            .fold(Votes::default(), |votes, m| match m.as_str() {
                "+1" => Votes { up: true, ..votes },
                _ => Votes { down: true, ..votes },
            })
    }

    fn value(self) -> i64 {
        match (self.up, self.down) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        }
    }
}

/// Vote carried by a single comment: +1, -1 or 0.
///
/// Repeating a marker does not add weight, and a comment carrying both
/// polarities counts as no vote at all.
pub fn score(body: &str) -> i64 {
    Votes::scan(body).value()
}
