extern crate smartcalc;

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{debug, info};
use smartcalc::command::{
    is_command, Command, BYE_MESSAGE, HELP_MESSAGE, UNKNOWN_COMMAND_MESSAGE,
};
use smartcalc::eval::DEFAULT_MAX_POWER_BITS;
use smartcalc::{Calculator, EvalConfig};

/// An integer calculator with variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The largest power result, in bits
    #[arg(long, default_value_t = DEFAULT_MAX_POWER_BITS)]
    max_power_bits: u64,

    /// Lines to process in order instead of reading standard input
    exprs: Vec<String>,
}

/// What the loop should do after a line.
enum Flow {
    Continue,
    Exit,
}

fn handle_line(calc: &mut Calculator, line: &str, out: &mut impl Write) -> io::Result<Flow> {
    let line = line.trim();

    if is_command(line) {
        match line.parse::<Command>() {
            Ok(Command::Exit) => {
                writeln!(out, "{}", BYE_MESSAGE)?;
                return Ok(Flow::Exit);
            }
            Ok(Command::Help) => writeln!(out, "{}", HELP_MESSAGE)?,
            Err(()) => writeln!(out, "{}", UNKNOWN_COMMAND_MESSAGE)?,
        }
        return Ok(Flow::Continue);
    }

    if let Some(message) = calc.process(line).message() {
        writeln!(out, "{}", message)?;
    }
    Ok(Flow::Continue)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut calc = Calculator::with_config(EvalConfig {
        max_power_bits: args.max_power_bits,
    });
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.exprs.is_empty() {
        for expr in &args.exprs {
            if let Flow::Exit = handle_line(&mut calc, expr, &mut out)? {
                break;
            }
        }
        return Ok(());
    }

    info!("reading lines from standard input");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if let Flow::Exit = handle_line(&mut calc, &line?, &mut out)? {
            return Ok(());
        }
    }

    debug!("end of input, {} variables defined", calc.store().len());
    Ok(())
}
