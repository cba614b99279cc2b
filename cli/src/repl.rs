use std::io::{self, Write};

use rustyline::{DefaultEditor, error::ReadlineError};

use east_core::{EastError, Vm, VmConfig};

fn print_repl_help() {
    eprintln!("Commands: :quit | :exit | :q, :help, :stack, :clear, :input TEXT");
}

/// Session commands. Any other line, including ones starting with `:`, is a program.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    Stack,
    Clear,
    Input(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    match line {
        ":quit" | ":exit" | ":q" => Some(Command::Quit),
        ":help" => Some(Command::Help),
        ":stack" => Some(Command::Stack),
        ":clear" => Some(Command::Clear),
        ":input" => Some(Command::Input("")),
        _ => line.strip_prefix(":input ").map(Command::Input),
    }
}

/// What one entered line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Entry<'a> {
    Blank,
    Command(Command<'a>),
    /// Program text exactly as typed; spaces and tabs push themselves.
    Program(&'a str),
}

fn classify(line: &str) -> Entry<'_> {
    let trimmed = line.trim_end();
    if trimmed.is_empty() {
        return Entry::Blank;
    }
    match parse_command(trimmed) {
        Some(command) => Entry::Command(command),
        None => Entry::Program(line),
    }
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<EastError>() {
        Some(east) => eprintln!("Error: {}", east),
        None => eprintln!("Error: {:#}", err),
    }
}

pub fn run(config: VmConfig) -> anyhow::Result<()> {
    // Stack, user instructions and input persist across lines
    let mut vm = Vm::new(config);
    let mut input: Vec<u8> = Vec::new();
    let mut out: Vec<u8> = Vec::new();

    // In-memory line editor with history and arrow key support
    let mut rl = DefaultEditor::new()?;

    print_repl_help();

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: drop the line and prompt again
                eprintln!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                return Ok(());
            }
            Err(e) => {
                eprintln!("Readline error: {}", e);
                continue;
            }
        };

        let program = match classify(&line) {
            Entry::Blank => continue,
            Entry::Command(command) => {
                let _ = rl.add_history_entry(line.trim_end());
                match command {
                    Command::Quit => return Ok(()),
                    Command::Help => print_repl_help(),
                    Command::Stack => println!("{}", vm.stack()),
                    Command::Clear => vm.stack_mut().clear(),
                    Command::Input(text) => input = text.as_bytes().to_vec(),
                }
                continue;
            }
            Entry::Program(program) => program,
        };
        let _ = rl.add_history_entry(program);

        out.clear();
        let result = vm.exec(program.as_bytes(), &input, &mut out);
        if !out.is_empty() {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&out)?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
        if let Err(e) = result {
            report(&e);
        }
    }
}
