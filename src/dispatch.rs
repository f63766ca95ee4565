use log::debug;

use crate::{help, Console, Context, Error, Input, Node, Result, Signature};

/// Walks `root` with the positional tokens of `input` until a leaf is reached,
/// then binds and runs it.
///
/// At a group the next token names a child. With no token left, or with an
/// option-looking token in a group that has a default child, the default child
/// is entered; otherwise the token is reported as an unknown command. `--help`
/// at a group or a leaf prints help for that node instead of running anything.
/// Dynamic leaves get the remaining input as is.
pub fn dispatch(root: &Node, mut input: Input, console: &mut dyn Console) -> Result<()> {
    let mut node = root;
    loop {
        match node {
            Node::Group(group) => match input.peek_argument() {
                Some(name) if !name.starts_with('-') => {
                    let name = name.to_string();
                    node = group.get(&name).ok_or_else(|| Error::UnknownCommand {
                        name: name.clone(),
                        available: group.names(),
                    })?;
                    input.next_argument();
                    input.enter(&name);
                    debug!("entered `{name}`");
                }
                next => {
                    let next = next.map(str::to_string);
                    if next.is_some() && input.next_flag("help", None) {
                        debug!("help requested for group `{}`", input.path().join(" "));
                        console.output(&help::group(input.path(), group));
                        return Ok(());
                    }
                    node = match (group.default_node(), next) {
                        (Some(default), _) => default,
                        (None, Some(name)) => {
                            return Err(Error::UnknownCommand { name, available: group.names() })
                        }
                        (None, None) => {
                            return Err(Error::MissingCommand { available: group.names() })
                        }
                    };
                    debug!("entered default command");
                }
            },
            Node::Leaf(leaf) => {
                if input.next_flag("help", None) {
                    debug!("help requested for `{}`", input.path().join(" "));
                    console.output(&help::command(input.path(), leaf.help(), leaf.fields()));
                    return Ok(());
                }
                let signature = Signature::bind(leaf.fields(), &mut input)?;
                if !input.is_empty() {
                    debug!("ignoring unconsumed tokens: {:?}", input.arguments());
                }
                let mut ctx = Context::new(console, input.path().to_vec());
                return leaf.command().run(&mut ctx, &signature);
            }
            Node::Dynamic(command) => {
                debug!("handing {} token(s) to dynamic command", input.arguments().len());
                let mut ctx = Context::new(console, input.path().to_vec());
                return command.run(&mut ctx, &mut input);
            }
        }
    }
}
