//! Declarative console commands with strongly-typed argument binding.
//!
//! A command declares its fields ([`Argument`], [`Opt`], [`Flag`]); the
//! dispatcher walks a tree of [`Group`]s using positional tokens, binds the
//! remaining tokens against the leaf's fields and hands the resulting
//! [`Signature`] to its run routine.
//!
//! ```
//! use xcmd::{Argument, Command, Context, Field, Flag, Group, Input, Node, Opt, Recorder, Signature};
//!
//! struct Greet {
//!     name: Argument<String>,
//!     times: Opt<u32>,
//!     loud: Flag,
//! }
//!
//! impl Command for Greet {
//!     fn help(&self) -> &str {
//!         "Says hello"
//!     }
//!
//!     fn fields(&self) -> Vec<&dyn Field> {
//!         vec![&self.name, &self.times, &self.loud]
//!     }
//!
//!     fn run(&self, ctx: &mut Context<'_>, sig: &Signature) -> xcmd::Result<()> {
//!         let mut text = format!("Hello, {}", sig.argument(&self.name));
//!         if sig.flag(&self.loud) {
//!             text = text.to_uppercase();
//!         }
//!         for _ in 0..sig.option(&self.times).value.copied().unwrap_or(1) {
//!             ctx.output(&text);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let greet = Greet {
//!     name: Argument::new("name").help("Who to greet"),
//!     times: Opt::new("times").short('t').help("How many times"),
//!     loud: Flag::new("loud").short('l'),
//! };
//! let root: Node = Group::new("Demo").command("greet", Node::leaf(greet)?)?.into();
//!
//! let mut console = Recorder::new();
//! let args = ["demo", "greet", "-t", "2", "world", "--loud"];
//! root.run(Input::new(args.iter().map(|it| it.to_string()).collect()), &mut console)?;
//! assert_eq!(console.text(), "HELLO, WORLD\nHELLO, WORLD\n");
//! # Ok::<(), xcmd::Error>(())
//! ```
//!
//! Options and flags are matched by exact name anywhere after the command
//! path (`--name` or, with a short alias, `-n`); arguments take the remaining
//! tokens in order. An option followed by nothing or by another `-` token is
//! present without a value. A value that starts with `-` is written with a
//! leading backslash: `--pattern \--x` binds `--x`.

mod command;
mod console;
mod dispatch;
mod error;
mod field;
mod input;
mod signature;

pub mod help;

pub use crate::{
    command::{Command, Context, DynamicCommand, Group, Leaf, Node},
    console::{Console, Recorder, Terminal},
    dispatch::dispatch,
    error::Error,
    field::{Argument, Descriptor, Field, Flag, Kind, Opt, OptionValue},
    input::Input,
    signature::{descriptors, Signature},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;
