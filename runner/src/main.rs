use std::{
    env::args_os,
    io::{Write, copy, stdin, stdout},
    process::{abort, exit},
};

fn main() {
    let args = args_os().skip(1).collect::<Vec<_>>();
    eprintln!("running: {args:?}");

    let mut stdout = stdout().lock();
    writeln!(stdout, "argc: {}", args.len()).unwrap();
    for (i, arg) in args.iter().enumerate() {
        write!(stdout, "{i}: ").unwrap();
        stdout.write_all(arg.as_encoded_bytes()).unwrap();
        writeln!(stdout).unwrap();
    }

    match args.first().and_then(|arg| arg.to_str()) {
        Some("cat") => {
            copy(&mut stdin().lock(), &mut stdout).unwrap();
        }
        Some("exit") => {
            let code = args[1].to_str().unwrap().parse::<i32>().unwrap();
            stdout.flush().unwrap();
            exit(code);
        }
        Some("abort") => {
            stdout.flush().unwrap();
            abort();
        }
        _ => {}
    }
}
