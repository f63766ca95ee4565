use xcmd::{Argument, Command, Context, Field, Flag, Input, Node, Signature, Terminal};

struct Hello {
    name: Argument<String>,
    emoji: Flag,
}

impl Command for Hello {
    fn help(&self) -> &str {
        "Greets somebody"
    }

    fn fields(&self) -> Vec<&dyn Field> {
        vec![&self.name, &self.emoji]
    }

    fn run(&self, ctx: &mut Context<'_>, sig: &Signature) -> xcmd::Result<()> {
        let bang = if sig.flag(&self.emoji) { "❣️" } else { "!" };
        ctx.output(&format!("Hello {}{}", sig.argument(&self.name), bang));
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let hello = Hello { name: Argument::new("name"), emoji: Flag::new("emoji").short('e') };
    let res = Input::from_env()
        .and_then(|input| Node::leaf(hello)?.run(input, &mut Terminal));
    if let Err(err) = res {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}
