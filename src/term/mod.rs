extern crate ansi_term;
extern crate ctrlc;
mod input;

use ansi_term::Style;
use clap::{CommandFactory, Parser};
use esscript::error;
use esscript::lang::Error;
use esscript::mach::{Config, Event, Runtime};
use input::InputThread;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "esscript")]
#[command(about = "Run an ESScript program")]
#[command(version)]
struct Cli {
    /// Script to execute
    script: Option<PathBuf>,

    /// Debug level of the interpreter
    #[arg(long, default_value_t = 0)]
    debug: u8,

    /// Character variable amount
    #[arg(long = "cvar", default_value_t = 32768)]
    cvars: usize,

    /// Variable amount
    #[arg(long = "var", default_value_t = 256)]
    vars: usize,

    /// Line execution starts on
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    entry: i64,

    /// Start where the original interpreter did, which runs nothing
    #[arg(long)]
    legacy_entry: bool,

    /// Report bad lines and run the rest of the script anyway
    #[arg(long)]
    lenient: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            vars: self.vars,
            cvars: self.cvars,
            entry: self.entry,
            legacy_entry: self.legacy_entry,
            lenient: self.lenient,
        }
    }
}

pub fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let path = match &cli.script {
        Some(path) => path,
        None => {
            println!("No script supplied!");
            println!("{}", Cli::command().render_usage());
            return;
        }
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }

    let source = match load(path) {
        Ok(source) => source,
        Err(error) => {
            report(&[error]);
            std::process::exit(1);
        }
    };
    let mut runtime = Runtime::new(cli.config());
    runtime.load(&source);

    match main_loop(&mut runtime, interrupted) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn init_tracing(debug: u8) {
    let level = match debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("esscript={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Returns false when the program stopped on an error.
fn main_loop(runtime: &mut Runtime, interrupted: Arc<AtomicBool>) -> std::io::Result<bool> {
    let mut input = InputThread::spawn(BufReader::new(std::io::stdin()));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut clean = true;

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => out.write_all(s.as_bytes())?,
            Event::Raw(byte) => out.write_all(&[byte])?,
            Event::Input(prompt) => {
                out.write_all(prompt.as_bytes())?;
                out.flush()?;
                // Interrupted waits leave the flag set for the next pass.
                if let Some(value) = input.wait(&interrupted)? {
                    runtime.enter_input(value);
                }
            }
            Event::Errors(errors) => {
                out.flush()?;
                report(&errors);
                if !runtime.is_running() {
                    clean = false;
                }
            }
        }
    }
    out.flush()?;
    debug!(clean, "execution finished");
    Ok(clean)
}

fn report(errors: &[Error]) {
    for error in errors.iter() {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
    }
}

fn load(path: &Path) -> Result<String, Error> {
    debug!(path = %path.display(), "reading file");
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    let mut source = String::new();
    if let Err(error) = file.read_to_string(&mut source) {
        return Err(error!(InternalError; error.to_string()));
    }
    Ok(source)
}
