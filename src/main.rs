use clap::{Parser, Subcommand};
use rpnstack::{
    ExprResult, StepEvent, StepObserver, build_infix, calculate, convert,
    engine::{builder::build_infix_with, evaluator::evaluate_with, machine::StackMachine},
    evaluate,
    util::num::format_fixed,
};

/// rpnstack converts infix expressions to postfix and back, evaluates
/// postfix expressions and plays with an operand stack.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log what the engine is doing to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an infix expression to postfix.
    Convert {
        /// Print every step of the conversion.
        #[arg(short, long)]
        trace: bool,

        expression: String,
    },
    /// Evaluate a numeric postfix expression.
    Eval {
        /// Print every step of the evaluation.
        #[arg(short, long)]
        trace: bool,

        expression: String,
    },
    /// Rebuild a parenthesized infix expression from postfix.
    Infix {
        /// Print every step of the rebuild.
        #[arg(short, long)]
        trace: bool,

        expression: String,
    },
    /// Convert an infix expression and evaluate it.
    Calc { expression: String },
    /// Run stack commands: a token pushes, `pop` pops, `+ - * /` apply.
    Stack {
        #[arg(allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

fn print_step(event: &StepEvent) {
    println!("{event}");
}

fn run(command: Command) -> ExprResult<()> {
    let mut printer = print_step;

    match command {
        Command::Convert { trace, expression } => {
            let observer: Option<&mut dyn StepObserver> = if trace { Some(&mut printer) } else { None };
            let postfix = convert(&expression, observer)?;
            println!("{postfix}");
        },
        Command::Eval { trace, expression } => {
            let value = if trace {
                evaluate_with(&expression, Some(&mut printer))?
            } else {
                evaluate(&expression)?
            };
            println!("{}", format_fixed(value));
        },
        Command::Infix { trace, expression } => {
            let infix = if trace {
                build_infix_with(&expression, Some(&mut printer))?
            } else {
                build_infix(&expression)?
            };
            println!("{infix}");
        },
        Command::Calc { expression } => println!("{}", format_fixed(calculate(&expression)?)),
        Command::Stack { words } => {
            let mut machine = StackMachine::new();
            let result = machine.run_script(&words.join(" "));
            print!("{machine}");
            result?;
        },
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(args.command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
