use std::{env::args_os, process::exit};

fn main() {
    let args = args_os().skip(1).collect::<Vec<_>>();
    exit(gut::run(&args));
}
