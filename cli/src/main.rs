use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use east_core::{DEFAULT_MAX_DEPTH, EastError, MAX_DEPTH_CEILING, Mode, Vm, VmConfig};

mod repl;

static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "east::vm=debug,east::cli=debug";

/// Input files above this size are refused outright.
const INPUT_SIZE_LIMIT: u64 = 1 << 30;

#[derive(Debug, Parser)]
#[command(
    name = "east",
    author,
    version,
    about = "East - Stack based esolang for text processing",
    long_about = None,
    after_help = "Without PROGRAM an interactive session is started."
)]
struct CliArgs {
    /// Program text to run (not a path); taken byte for byte
    #[arg(value_name = "PROGRAM")]
    program: Option<OsString>,

    /// File to read the input text from; stdin is used when omitted
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Use TEXT as the input text instead of reading a file or stdin
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input_file")]
    input: Option<OsString>,

    /// Numeric mode of the value stack
    #[arg(short, long, value_enum, default_value_t = ModeArg::Byte)]
    mode: ModeArg,

    /// Maximum nesting of `=` and `$` executions (at most 4096)
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_DEPTH_CEILING as u64)
    )]
    max_depth: usize,

    /// Abort after executing N instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Print the final value stack to stderr
    #[arg(long)]
    dump_stack: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Byte,
    Float,
    Double,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Byte => Mode::Byte,
            ModeArg::Float => Mode::Float,
            ModeArg::Double => Mode::Double,
        }
    }
}

impl CliArgs {
    fn vm_config(&self) -> VmConfig {
        VmConfig::new(self.mode.into())
            .with_max_depth(self.max_depth)
            .with_max_steps(self.max_steps)
    }
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn maybe_init_tracing() {
    let raw = match std::env::var("EAST_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

/// Drop a single trailing newline, as left by editors and `echo`.
fn strip_trailing_newline(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
}

fn read_input_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => anyhow::bail!("No such file"),
        Err(e) => return Err(e).with_context(|| format!("Failed to read file '{}'", path.display())),
    };
    if meta.len() > INPUT_SIZE_LIMIT {
        anyhow::bail!("File too large");
    }
    fs::read(path).with_context(|| format!("Failed to read file '{}'", path.display()))
}

/// Input text: the file when given, then `--input`, then all of stdin.
fn read_input(file: Option<&Path>, inline: Option<&OsStr>) -> anyhow::Result<Vec<u8>> {
    let mut raw = match (file, inline) {
        (Some(path), _) => read_input_file(path)?,
        (None, Some(text)) => return Ok(text.as_encoded_bytes().to_vec()),
        (None, None) => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };
    strip_trailing_newline(&mut raw);
    Ok(raw)
}

/// Render a failed run the way it is shown on stderr.
fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<EastError>() {
        Some(east) => format!("East, error while interpreting\n{}", east),
        None => format!("East: {:#}", err),
    }
}

fn run_program(args: &CliArgs, program: &OsStr) -> anyhow::Result<()> {
    let input = read_input(args.input_file.as_deref(), args.input.as_deref())?;
    tracing::debug!(
        target: "east::cli",
        mode = %Mode::from(args.mode),
        input_len = input.len(),
        "running program"
    );

    let mut vm = Vm::new(args.vm_config());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = vm.exec(program.as_encoded_bytes(), &input, &mut out);

    // Output produced before a failure is still shown.
    out.flush().context("Failed to write output")?;
    if args.dump_stack {
        eprintln!("{}", vm.stack());
    }
    result?;

    out.write_all(b"\n").context("Failed to write output")?;
    out.flush().context("Failed to write output")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let args = CliArgs::parse();

    // No program: enter REPL
    let Some(program) = args.program.as_deref() else {
        return repl::run(args.vm_config());
    };

    if let Err(e) = run_program(&args, program) {
        eprintln!("{}", format_error(&e));
        std::process::exit(1);
    }
    Ok(())
}
