//! `cargo run --example group -- remote add origin https://example.com --fetch`
use xcmd::{
    Argument, Command, Context, DynamicCommand, Field, Flag, Group, Input, Node, Opt, Signature,
    Terminal,
};

struct Add {
    name: Argument<String>,
    url: Argument<String>,
    fetch: Flag,
    track: Opt<String>,
}

impl Command for Add {
    fn help(&self) -> &str {
        "Adds a remote named <name> for the repository at <url>"
    }

    fn fields(&self) -> Vec<&dyn Field> {
        vec![&self.name, &self.url, &self.fetch, &self.track]
    }

    fn run(&self, ctx: &mut Context<'_>, sig: &Signature) -> xcmd::Result<()> {
        ctx.output(&format!("added {} -> {}", sig.argument(&self.name), sig.argument(&self.url)));
        let track = sig.option(&self.track);
        match track.value {
            Some(branch) => ctx.output(&format!("tracking {branch}")),
            None if track.present => ctx.output("tracking the default branch"),
            None => (),
        }
        if sig.flag(&self.fetch) {
            ctx.output("fetching...");
        }
        Ok(())
    }
}

struct Exec;

impl DynamicCommand for Exec {
    fn help(&self) -> &str {
        "Runs the rest of the line verbatim"
    }

    fn run(&self, ctx: &mut Context<'_>, input: &mut Input) -> xcmd::Result<()> {
        ctx.output(&input.arguments().join(" "));
        Ok(())
    }
}

fn tree() -> xcmd::Result<Node> {
    let add = Add {
        name: Argument::new("name").help("Short name of the remote"),
        url: Argument::new("url").help("Where the repository lives"),
        fetch: Flag::new("fetch").short('f').help("Fetch right away"),
        track: Opt::new("track").short('t').help("Branch to track\nDefaults to the remote HEAD"),
    };
    let remote = Group::new("Manages remotes").command("add", Node::leaf(add)?)?;
    let root = Group::new("A tiny demo").command("remote", remote)?.command("exec", Node::dynamic(Exec))?;
    Ok(root.into())
}

fn main() {
    env_logger::init();

    let res = Input::from_env().and_then(|input| tree()?.run(input, &mut Terminal));
    if let Err(err) = res {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}
