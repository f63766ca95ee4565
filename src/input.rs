use log::trace;

use crate::{Error, Result};

/// The raw tokens of one invocation plus a cursor for positional consumption.
///
/// Positional tokens are consumed strictly left to right. Named options and
/// flags may be picked out of anywhere at or after the cursor; the matching
/// token (and its value, if any) is removed, so every token is observed by at
/// most one descriptor.
#[derive(Debug, Clone)]
pub struct Input {
    path: Vec<String>,
    tokens: Vec<String>,
    cursor: usize,
}

impl Input {
    /// Creates an input from a full argument vector. The first element is the
    /// program name and is never matched against any descriptor.
    pub fn new(mut args: Vec<String>) -> Self {
        let executable = if args.is_empty() { String::new() } else { args.remove(0) };
        Self { path: vec![executable], tokens: args, cursor: 0 }
    }

    pub fn from_env() -> Result<Self> {
        let args = std::env::args_os()
            .map(|arg| arg.into_string().map_err(|it| Error::NotUnicode(format!("{it:?}"))))
            .collect::<Result<Vec<_>>>()?;
        Ok(Input::new(args))
    }

    pub fn executable(&self) -> &str {
        &self.path[0]
    }

    /// Program name followed by every command name entered so far.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub(crate) fn enter(&mut self, name: &str) {
        self.path.push(name.to_string())
    }

    /// Tokens not yet consumed, in their original order.
    pub fn arguments(&self) -> &[String] {
        &self.tokens[self.cursor..]
    }

    pub fn is_empty(&self) -> bool {
        self.arguments().is_empty()
    }

    pub fn peek_argument(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    pub fn next_argument(&mut self) -> Option<String> {
        let arg = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        trace!("consumed positional `{arg}`");
        Some(arg)
    }

    /// Removes the leftmost `--name` or `-short` token together with its value.
    ///
    /// Returns `None` when the option does not appear, `Some(None)` when it
    /// appears without a value, and `Some(Some(value))` otherwise. A following
    /// token that starts with `-` is not a value unless it is escaped as
    /// `\-...`, in which case the backslash is dropped.
    pub fn next_option(&mut self, name: &str, short: Option<char>) -> Option<Option<String>> {
        let idx = self.find(name, short)?;
        let flag = self.tokens.remove(idx);

        let value = match self.tokens.get(idx) {
            None => None,
            Some(next) if next.starts_with("\\-") => {
                let value = next[1..].to_string();
                self.tokens.remove(idx);
                Some(value)
            }
            Some(next) if next.starts_with('-') => None,
            Some(_) => Some(self.tokens.remove(idx)),
        };
        trace!("consumed option `{flag}` with value {value:?}");
        Some(value)
    }

    /// Removes the leftmost `--name` or `-short` token, reporting whether it
    /// was there.
    pub fn next_flag(&mut self, name: &str, short: Option<char>) -> bool {
        match self.find(name, short) {
            Some(idx) => {
                let flag = self.tokens.remove(idx);
                trace!("consumed flag `{flag}`");
                true
            }
            None => false,
        }
    }

    fn find(&self, name: &str, short: Option<char>) -> Option<usize> {
        self.arguments()
            .iter()
            .position(|it| is_long(it, name) || short.map_or(false, |short| is_short(it, short)))
            .map(|pos| self.cursor + pos)
    }
}

fn is_long(token: &str, name: &str) -> bool {
    token.strip_prefix("--") == Some(name)
}

fn is_short(token: &str, short: char) -> bool {
    let mut chars = match token.strip_prefix('-') {
        Some(rest) => rest.chars(),
        None => return false,
    };
    chars.next() == Some(short) && chars.next().is_none()
}
