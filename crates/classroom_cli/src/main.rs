//! Interactive classroom manager session.
//!
//! # Responsibility
//! - Wire stdin/stdout to the core command dispatcher.
//! - Keep process concerns (prompt, flags, exit code) out of the core crate.

use classroom_core::{core_version, init_logging, ClassroomRegistry, CommandDispatcher, Dispatch};
use log::info;
use std::io::{BufRead, Write};

fn main() {
    let options = match SessionOptions::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    // Logging is optional; a failed bootstrap must not kill the session.
    if let Some(log_dir) = options.log_dir.as_deref() {
        if let Err(message) = init_logging(&options.log_level, log_dir) {
            eprintln!("logging disabled: {message}");
        }
    }

    println!(
        "Welcome to the Virtual Classroom Manager (core v{}).",
        core_version()
    );
    println!("Type 'help' to see available commands.");

    let mut dispatcher = CommandDispatcher::new(ClassroomRegistry::new());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = stdout.flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            // EOF ends the session the same way `exit` does.
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        }

        match dispatcher.dispatch_line(&line) {
            Dispatch::Reply(text) => println!("{text}"),
            Dispatch::Silent => {}
            Dispatch::Exit(farewell) => {
                println!("{farewell}");
                break;
            }
        }
    }

    info!("event=session_end module=cli status=ok");
}

struct SessionOptions {
    log_dir: Option<String>,
    log_level: String,
}

impl SessionOptions {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Self {
            log_dir: None,
            log_level: classroom_core::default_log_level().to_string(),
        };

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--log-dir" => {
                    options.log_dir = Some(
                        args.next()
                            .ok_or_else(|| "--log-dir requires a path argument".to_string())?,
                    );
                }
                "--log-level" => {
                    options.log_level = args
                        .next()
                        .ok_or_else(|| "--log-level requires a level argument".to_string())?;
                }
                other => {
                    return Err(format!(
                        "unknown option `{other}`; supported: --log-dir <path>, --log-level <level>"
                    ));
                }
            }
        }

        Ok(options)
    }
}
