use expect_test::expect;
use xcmd::{Argument, Command, Context, Field, Flag, Group, Node, Opt, Signature};

use crate::{check, test_group};

#[test]
fn command_help() {
    check(
        &test_group(),
        "vapor sub test --help",
        expect![[r#"
            Usage: vapor sub test <foo> [--bar,-b] [--baz,-B]

            This is a test command

            Arguments:
              foo A foo is required
                  An error will occur if none exists

            Options:
              bar Add a bar if you so desire
                  Try passing it

            Flags:
              baz Add a baz if you so desire
                  It's just a flag
        "#]],
    );
}

#[test]
fn help_wins_over_binding() {
    // `foo` is missing, but help does not need it.
    check(
        &test_group(),
        "vapor sub test --bar x --help",
        expect![[r#"
            Usage: vapor sub test <foo> [--bar,-b] [--baz,-B]

            This is a test command

            Arguments:
              foo A foo is required
                  An error will occur if none exists

            Options:
              bar Add a bar if you so desire
                  Try passing it

            Flags:
              baz Add a baz if you so desire
                  It's just a flag
        "#]],
    );
}

struct Sparse {
    verbose: Flag,
    level: Opt<u8>,
}

impl Command for Sparse {
    fn help(&self) -> &str {
        ""
    }

    fn fields(&self) -> Vec<&dyn Field> {
        vec![&self.verbose, &self.level]
    }

    fn run(&self, _ctx: &mut Context<'_>, _sig: &Signature) -> xcmd::Result<()> {
        Ok(())
    }
}

#[test]
fn empty_sections_are_omitted() {
    let root = Node::leaf(Sparse {
        verbose: Flag::new("verbose").help("Talk more"),
        level: Opt::new("level").short('l'),
    })
    .unwrap();
    check(
        &root,
        "app --help",
        expect![[r#"
            Usage: app [--level,-l] [--verbose]

            Options:
                level n/a

            Flags:
              verbose Talk more
        "#]],
    );
}

struct Bare;

impl Command for Bare {
    fn help(&self) -> &str {
        "Does nothing\nat all"
    }

    fn run(&self, _ctx: &mut Context<'_>, _sig: &Signature) -> xcmd::Result<()> {
        Ok(())
    }
}

#[test]
fn command_without_fields() {
    check(
        &Node::leaf(Bare).unwrap(),
        "app --help",
        expect![[r#"
            Usage: app

            Does nothing
            at all
        "#]],
    );
}

#[test]
fn group_help() {
    check(
        &test_group(),
        "vapor sub --help",
        expect![[r#"
            Usage: vapor sub <command>

            This is a test grouping!

            Commands:
              test This is a test command
              echo Prints whatever it is given

            Use `vapor sub <command> --help` for more information on a command.
        "#]],
    );
    check(
        &test_group(),
        "vapor --help",
        expect![[r#"
            Usage: vapor <command>

            This is a test group

            Commands:
                 sub This is a test grouping!
              strict I error if you pass in bad values

            Use `vapor <command> --help` for more information on a command.
        "#]],
    );
}

#[test]
fn rendering_is_a_pure_function() {
    let fields = xcmd::descriptors(&[
        &Argument::<String>::new("src").help("Where from"),
        &Argument::<String>::new("dst"),
    ]);
    let path = ["cp".to_string()];
    let text = xcmd::help::command(&path, "Copies", &fields);
    assert_eq!(text, xcmd::help::command(&path, "Copies", &fields));
    expect![[r#"
        Usage: cp <src> <dst>

        Copies

        Arguments:
          src Where from
          dst n/a"#]]
    .assert_eq(&text);

    let group = Group::new("").command("cp", Node::leaf(Bare).unwrap()).unwrap();
    expect![[r#"
        Usage: tool <command>

        Commands:
          cp Does nothing

        Use `tool <command> --help` for more information on a command."#]]
    .assert_eq(&xcmd::help::group(&["tool".to_string()], &group));
}
