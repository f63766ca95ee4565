use indexmap::IndexMap;

use crate::{signature, Console, Descriptor, Error, Field, Input, Result, Signature};

/// A leaf command with declared fields.
pub trait Command: Send + Sync {
    fn help(&self) -> &str;

    /// Declared fields. Arguments bind in the order listed here.
    fn fields(&self) -> Vec<&dyn Field> {
        Vec::new()
    }

    fn run(&self, ctx: &mut Context<'_>, signature: &Signature) -> Result<()>;
}

/// A leaf command that interprets the remaining tokens itself.
pub trait DynamicCommand: Send + Sync {
    fn help(&self) -> &str {
        ""
    }

    fn run(&self, ctx: &mut Context<'_>, input: &mut Input) -> Result<()>;
}

/// What a run routine gets besides its arguments.
pub struct Context<'a> {
    console: &'a mut dyn Console,
    path: Vec<String>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(console: &'a mut dyn Console, path: Vec<String>) -> Context<'a> {
        Context { console, path }
    }

    pub fn output(&mut self, text: &str) {
        self.console.output(text)
    }

    /// Program name followed by the names of the commands entered.
    pub fn path(&self) -> &[String] {
        &self.path
    }
}

pub enum Node {
    Group(Group),
    Leaf(Leaf),
    Dynamic(Box<dyn DynamicCommand>),
}

impl Node {
    /// Wraps a command, checking its fields for clashing names.
    pub fn leaf(command: impl Command + 'static) -> Result<Node> {
        Leaf::new(Box::new(command)).map(Node::Leaf)
    }

    pub fn dynamic(command: impl DynamicCommand + 'static) -> Node {
        Node::Dynamic(Box::new(command))
    }

    pub fn help(&self) -> &str {
        match self {
            Node::Group(it) => it.help(),
            Node::Leaf(it) => it.command.help(),
            Node::Dynamic(it) => it.help(),
        }
    }

    /// Dispatches `input` through this tree, see [`crate::dispatch`].
    pub fn run(&self, input: Input, console: &mut dyn Console) -> Result<()> {
        crate::dispatch(self, input, console)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Node {
        Node::Group(group)
    }
}

pub struct Leaf {
    command: Box<dyn Command>,
    fields: Vec<Descriptor>,
}

impl Leaf {
    pub fn new(command: Box<dyn Command>) -> Result<Leaf> {
        let fields = signature::descriptors(&command.fields());
        Signature::check(&fields)?;
        Ok(Leaf { command, fields })
    }

    pub fn help(&self) -> &str {
        self.command.help()
    }

    pub fn fields(&self) -> &[Descriptor] {
        &self.fields
    }

    pub(crate) fn command(&self) -> &dyn Command {
        &*self.command
    }
}

/// Named children, kept in declaration order for help listings.
pub struct Group {
    help: String,
    commands: IndexMap<String, Node>,
    default: Option<String>,
}

impl Group {
    pub fn new(help: impl Into<String>) -> Group {
        Group { help: help.into(), commands: IndexMap::new(), default: None }
    }

    pub fn command(mut self, name: impl Into<String>, node: impl Into<Node>) -> Result<Group> {
        let name = name.into();
        if self.commands.contains_key(&name) {
            return Err(Error::DuplicateCommand(name));
        }
        self.commands.insert(name, node.into());
        Ok(self)
    }

    /// Like [`Group::command`], and also runs `node` when no child is named.
    pub fn default_command(self, name: impl Into<String>, node: impl Into<Node>) -> Result<Group> {
        let name = name.into();
        let mut group = self.command(name.clone(), node)?;
        group.default = Some(name);
        Ok(group)
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.commands.get(name)
    }

    pub fn default_node(&self) -> Option<&Node> {
        self.default.as_deref().and_then(|name| self.commands.get(name))
    }

    pub fn commands(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.commands.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}
