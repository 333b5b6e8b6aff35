//! Renders roff man pages for the whole command tree into
//! `$OUT_DIR/man`. Packagers pick them up from there; nothing at
//! runtime reads them.

use std::env;
use std::fs;
use std::path::Path;

use clap::CommandFactory;

// cli.rs is self-contained over clap + clap_complete (both build
// dependencies), so including it here avoids a separate definition
// crate.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = env::var_os("OUT_DIR").expect("cargo sets OUT_DIR");
    let man_dir = Path::new(&out_dir).join("man");
    fs::create_dir_all(&man_dir).expect("create $OUT_DIR/man");

    // Walk the command tree with a worklist; each page is named by its
    // full command path (venuesync.1, venuesync-bookings-quote.1).
    let mut pending = vec![cli::Cli::command().name("venuesync")];
    while let Some(cmd) = pending.pop() {
        let name = cmd.get_name().to_owned();

        let mut page = Vec::new();
        clap_mangen::Man::new(cmd.clone())
            .render(&mut page)
            .unwrap_or_else(|err| panic!("render {name}.1: {err}"));
        fs::write(man_dir.join(format!("{name}.1")), page)
            .unwrap_or_else(|err| panic!("write {name}.1: {err}"));

        for sub in cmd.get_subcommands() {
            // The implicit `help` subcommand gets no page.
            if sub.get_name() == "help" {
                continue;
            }
            pending.push(sub.clone().name(format!("{name}-{}", sub.get_name())));
        }
    }
}
