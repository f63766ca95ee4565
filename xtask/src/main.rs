
use std::time::Instant;

use xshell::{cmd, Shell};

fn main() -> xshell::Result<()> {
    let sh = Shell::new()?;

    cmd!(sh, "rustup toolchain install stable --no-self-update").run()?;
    let _e = sh.push_env("RUSTUP_TOOLCHAIN", "stable");
    cmd!(sh, "rustc --version").run()?;

    {
        let _s = section("TIDY");
        cmd!(sh, "cargo fmt --all -- --check").run()?;
    }

    {
        let _s = section("BUILD");
        cmd!(sh, "cargo test --workspace --no-run").run()?;
    }

    {
        let _s = section("TEST");
        cmd!(sh, "cargo test --workspace -- --nocapture").run()?;
    }

    {
        let _s = section("DEMOS");
        cmd!(sh, "cargo run --example hello -- world").run()?;
        cmd!(sh, "cargo run --example group -- remote add origin https://example.com -t").run()?;
        cmd!(sh, "cargo run --example group -- remote add --help").run()?;
    }

    {
        let _s = section("PACKAGE");
        // Releases are cut by hand; CI only checks that the crate packages cleanly.
        cmd!(sh, "cargo publish -p xcmd --dry-run --allow-dirty").run()?;
    }

    Ok(())
}

/// Folds the output of one CI step into a collapsible group and reports how
/// long the step took once the guard goes away.
struct Section {
    name: &'static str,
    start: Instant,
}

fn section(name: &'static str) -> Section {
    println!("::group::{name}");
    Section { name, start: Instant::now() }
}

impl Drop for Section {
    fn drop(&mut self) {
        eprintln!("{}: {:.2?}", self.name, self.start.elapsed());
        println!("::endgroup::");
    }
}
