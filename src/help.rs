//! Fixed-layout help text for commands and groups.
//!
//! ```text
//! Usage: vapor sub test <foo> [--bar,-b] [--baz,-B]
//!
//! This is a test command
//!
//! Arguments:
//!   foo A foo is required
//!       An error will occur if none exists
//!
//! Options:
//!   bar Add a bar if you so desire
//!
//! Flags:
//!   baz Add a baz if you so desire
//! ```
use std::fmt::Write;

use crate::{Descriptor, Group, Kind};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

/// Help for a leaf command reached through `path`.
///
/// The usage line lists arguments, then options, then flags, and carries no
/// trailing space (ConsoleKit's `testHelp` output ends that line with one).
pub fn command(path: &[String], help: &str, fields: &[Descriptor]) -> String {
    let mut buf = String::new();

    w!(buf, "Usage: {}", path.join(" "));
    for field in fields.iter().filter(|it| it.kind() == Kind::Argument) {
        w!(buf, " <{}>", field.name());
    }
    let options = fields.iter().filter(|it| it.kind() == Kind::Option);
    for field in options.chain(fields.iter().filter(|it| it.kind() == Kind::Flag)) {
        match field.short() {
            Some(short) => w!(buf, " [--{},-{short}]", field.name()),
            None => w!(buf, " [--{}]", field.name()),
        }
    }
    w!(buf, "\n");
    paragraph(&mut buf, help);

    let width = fields.iter().map(|it| it.name().len()).max().unwrap_or(0) + 2;
    let sections = [("Arguments", Kind::Argument), ("Options", Kind::Option), ("Flags", Kind::Flag)];
    for (title, kind) in sections {
        let mut section = fields.iter().filter(|it| it.kind() == kind).peekable();
        if section.peek().is_none() {
            continue;
        }
        blank_line(&mut buf);
        w!(buf, "{title}:\n");
        for field in section {
            item(&mut buf, field.name(), field.help(), width);
        }
    }

    finish(buf)
}

/// Help for a group: its children and how to ask about one of them.
pub fn group(path: &[String], group: &Group) -> String {
    let mut buf = String::new();
    let path = path.join(" ");

    w!(buf, "Usage: {path} <command>\n");
    paragraph(&mut buf, group.help());

    let width = group.commands().map(|(name, _)| name.len()).max().unwrap_or(0) + 2;
    if group.commands().next().is_some() {
        blank_line(&mut buf);
        w!(buf, "Commands:\n");
        for (name, node) in group.commands() {
            let summary = node.help().lines().next().unwrap_or_default();
            item(&mut buf, name, summary, width);
        }
    }

    blank_line(&mut buf);
    w!(buf, "Use `{path} <command> --help` for more information on a command.\n");
    finish(buf)
}

fn paragraph(buf: &mut String, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        blank_line(buf);
        w!(buf, "{text}\n");
    }
}

/// `name` right-aligned to `width`, first help line beside it, the rest
/// indented under it.
fn item(buf: &mut String, name: &str, help: &str, width: usize) {
    let mut lines = help.lines().map(str::trim_end);
    let first = lines.next().filter(|it| !it.is_empty()).unwrap_or("n/a");
    w!(buf, "{name:>width$} {first}\n");
    for line in lines {
        w!(buf, "{blank:indent$}{line}\n", blank = "", indent = width + 1);
    }
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}

// The console terminates the last line.
fn finish(mut buf: String) -> String {
    if buf.ends_with('\n') {
        buf.pop();
    }
    buf
}
