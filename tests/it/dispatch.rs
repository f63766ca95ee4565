use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use expect_test::expect;
use xcmd::{Command, Context, Error, Group, Node, Recorder, Signature};

use crate::{check, input, strict, test_group, TestCommand};

#[test]
fn two_levels_down() {
    check(
        &test_group(),
        "vapor sub test foovalue --bar baz",
        expect![[r#"
            Foo: foovalue Bar: baz
        "#]],
    );
    check(
        &test_group(),
        "vapor sub test foovalue -b baz -B",
        expect![[r#"
            Foo: foovalue Bar: baz Baz
        "#]],
    );
}

#[test]
fn unknown_command() {
    check(
        &test_group(),
        "vapor sub nope",
        expect!["Unknown command: `nope`. Available: `test`, `echo`"],
    );
    check(
        &test_group(),
        "vapor nope test foo",
        expect!["Unknown command: `nope`. Available: `sub`, `strict`"],
    );

    let mut console = Recorder::new();
    let err = test_group().run(input("vapor sub nope"), &mut console).unwrap_err();
    assert!(matches!(err, Error::UnknownCommand { ref name, .. } if name == "nope"));
    assert_eq!(console.text(), "");
}

#[test]
fn missing_command() {
    check(
        &test_group(),
        "vapor sub",
        expect!["A subcommand is required. Available: `test`, `echo`"],
    );
    // Without a default child, an option where a child name belongs is not
    // skipped over.
    check(
        &test_group(),
        "vapor sub --bar",
        expect!["Unknown command: `--bar`. Available: `test`, `echo`"],
    );
    check(
        &test_group(),
        "vapor -v sub test foo",
        expect!["Unknown command: `-v`. Available: `sub`, `strict`"],
    );
}

#[test]
fn missing_argument() {
    check(
        &test_group(),
        "vapor sub test --bar baz",
        expect!["Missing required argument: `foo`. Use `--help` for more information"],
    );
}

#[test]
fn strict_types() {
    check(
        &strict(),
        "vapor 3 true",
        expect![[r#"
            Done! 3 true
        "#]],
    );
    check(&strict(), "vapor e true", expect!["Can't parse argument `count` as i32"]);
    check(&strict(), "vapor 3 nope", expect!["Can't parse argument `truth` as bool"]);
    check(
        &strict(),
        "vapor 3",
        expect!["Missing required argument: `truth`. Use `--help` for more information"],
    );
}

#[test]
fn dynamic_access() {
    check(
        &test_group(),
        "vapor sub echo true --count 42",
        expect![[r#"
            vapor sub echo ["true", "--count", "42"]
        "#]],
    );
    // No help interception for dynamic commands.
    check(
        &test_group(),
        "vapor sub echo --help",
        expect![[r#"
            vapor sub echo ["--help"]
        "#]],
    );
}

#[test]
fn default_command() {
    let root: Node = Group::new("")
        .default_command("test", Node::leaf(TestCommand::new()).unwrap())
        .unwrap()
        .command("strict", strict())
        .unwrap()
        .into();

    check(
        &root,
        "vapor test foovalue",
        expect![[r#"
            Foo: foovalue Bar: none
        "#]],
    );
    check(
        &root,
        "vapor --bar baz",
        expect!["Missing required argument: `foo`. Use `--help` for more information"],
    );
    check(
        &root,
        "vapor",
        expect!["Missing required argument: `foo`. Use `--help` for more information"],
    );
    // A positional token always names a child.
    check(&root, "vapor foovalue", expect!["Unknown command: `foovalue`. Available: `test`, `strict`"]);
}

#[test]
fn duplicate_names_are_rejected() {
    let err = Group::new("")
        .command("test", strict())
        .unwrap()
        .command("test", strict())
        .err()
        .unwrap();
    expect!["Command declared more than once: `test`"].assert_eq(&err.to_string());

    struct Clash {
        a: xcmd::Opt<String>,
        b: xcmd::Flag,
    }
    impl Command for Clash {
        fn help(&self) -> &str {
            ""
        }
        fn fields(&self) -> Vec<&dyn xcmd::Field> {
            vec![&self.a, &self.b]
        }
        fn run(&self, _ctx: &mut Context<'_>, _sig: &Signature) -> xcmd::Result<()> {
            Ok(())
        }
    }
    let err = Node::leaf(Clash {
        a: xcmd::Opt::new("all").short('a'),
        b: xcmd::Flag::new("append").short('a'),
    })
    .err()
    .unwrap();
    expect!["Field declared more than once: `append`"].assert_eq(&err.to_string());
}

#[test]
fn help_field_is_reserved() {
    struct Helpful {
        help: xcmd::Flag,
    }
    impl Command for Helpful {
        fn help(&self) -> &str {
            ""
        }
        fn fields(&self) -> Vec<&dyn xcmd::Field> {
            vec![&self.help]
        }
        fn run(&self, _ctx: &mut Context<'_>, _sig: &Signature) -> xcmd::Result<()> {
            Ok(())
        }
    }
    let err = Node::leaf(Helpful { help: xcmd::Flag::new("help").short('h') }).err().unwrap();
    assert!(matches!(err, Error::ReservedField(ref name) if name == "help"));
    expect!["Field name is reserved: `help`"].assert_eq(&err.to_string());
}

struct Counting(Arc<AtomicUsize>);

impl Command for Counting {
    fn help(&self) -> &str {
        "Counts runs"
    }

    fn run(&self, _ctx: &mut Context<'_>, _sig: &Signature) -> xcmd::Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Err(Error::run("counted"))
    }
}

#[test]
fn run_errors_reach_the_caller() {
    let runs = Arc::new(AtomicUsize::new(0));
    let root = Node::leaf(Counting(Arc::clone(&runs))).unwrap();

    check(&root, "count", expect!["counted"]);
    check(&root, "count --help", expect![[r#"
        Usage: count

        Counts runs
    "#]]);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn tree_is_shared_between_threads() {
    let root = Arc::new(test_group());
    let handles = (0..4)
        .map(|i| {
            let root = Arc::clone(&root);
            std::thread::spawn(move || {
                let mut console = Recorder::new();
                root.run(input(&format!("vapor sub test foo{i}")), &mut console).unwrap();
                console.take()
            })
        })
        .collect::<Vec<_>>();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("Foo: foo{i} Bar: none\n"));
    }
}
