use clap::{Parser, Subcommand, ValueEnum};

use scicalc::{
    console::ReadlineConsole,
    diagnostics::{CalcError, Result},
    ops,
    repl::Session,
    scan,
    value::Outcome,
};

#[derive(Parser)]
#[command(author, version, about = "Interactive scientific calculator")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive calculator menu
    Menu,
    /// Evaluate a single operation without entering the menu
    Eval {
        #[arg(value_enum)]
        op: EvalOp,
        /// One operand for sqrt/factorial/ln, two (base, exponent) for pow
        #[arg(allow_hyphen_values = true)]
        operands: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EvalOp {
    Sqrt,
    Factorial,
    Ln,
    Pow,
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let console = ReadlineConsole::new()?;
            let mut session = Session::new(console);
            session.run()
        }
        Command::Eval { op, operands } => {
            let outcome = eval(op, &operands)?;
            println!("Result: {outcome}");
            Ok(())
        }
    }
}

fn eval(op: EvalOp, operands: &[String]) -> Result<Outcome> {
    match op {
        EvalOp::Sqrt => Ok(ops::square_root(single_real("sqrt", operands)?)),
        EvalOp::Factorial => Ok(ops::factorial(single_integer("factorial", operands)?)),
        EvalOp::Ln => Ok(ops::natural_log(single_real("ln", operands)?)),
        EvalOp::Pow => {
            ensure_arity("pow", operands, 2)?;
            Ok(ops::power(
                scan::parse_real(&operands[0])?,
                scan::parse_real(&operands[1])?,
            ))
        }
    }
}

fn single_real(name: &'static str, operands: &[String]) -> Result<f64> {
    ensure_arity(name, operands, 1)?;
    scan::parse_real(&operands[0])
}

fn single_integer(name: &'static str, operands: &[String]) -> Result<i64> {
    ensure_arity(name, operands, 1)?;
    scan::parse_integer(&operands[0])
}

fn ensure_arity(name: &'static str, operands: &[String], expected: usize) -> Result<()> {
    if operands.len() != expected {
        return Err(CalcError::Arity {
            name,
            expected,
            received: operands.len(),
        });
    }
    Ok(())
}
