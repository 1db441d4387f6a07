//! The rat app, a command-line front end for [librat].
//!
//! rat reads a rational, optionally applies one operation to it, and prints the canonical
//! result:
//!
//! ```text
//! $ rat 2/3 add 1/2
//! 7/6
//! $ rat -- -8/3 floor
//! -3
//! $ rat 2.3
//! 23/10
//! ```

#![deny(missing_docs)]


mod logger;
pub use logger::init_logger;

use librat::{RatError, Rational};
use log::{debug, info};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// An operation rat can apply to a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Print the canonical form of the value.
    Show,
    /// Absolute value.
    Abs,
    /// Additive inverse.
    Neg,
    /// Reciprocal.
    Inv,
    /// Greatest integer less than or equal to the value.
    Floor,
    /// Sum with the operand.
    Add,
    /// Difference with the operand.
    Sub,
    /// Product with the operand.
    Mul,
    /// Quotient by the operand.
    Div,
    /// Comparison with the operand, as -1, 0, or 1.
    Cmp,
    /// Integer power, with the operand as the exponent.
    Pow,
}

macro_rules! operation_names {
    ($($variant:ident: $name:expr)*) => {
        impl Operation {
            /// Names of all operations, as accepted on the command line.
            pub const NAMES: &'static [&'static str] = &[$($name),*];

            /// The command-line name of the operation.
            pub fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }
        }

        impl FromStr for Operation {
            type Err = String;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $($name => Ok(Operation::$variant),)*
                    _ => Err(format!("unknown operation \"{}\"", name)),
                }
            }
        }
    };
}

operation_names! {
    Show: "show"
    Abs: "abs"
    Neg: "neg"
    Inv: "inv"
    Floor: "floor"
    Add: "add"
    Sub: "sub"
    Mul: "mul"
    Div: "div"
    Cmp: "cmp"
    Pow: "pow"
}

impl Operation {
    /// Whether the operation needs an operand.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Operation::Add
                | Operation::Sub
                | Operation::Mul
                | Operation::Div
                | Operation::Cmp
                | Operation::Pow
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options to run rat with.
pub struct Opts {
    /// The rational to operate on, in any text form librat parses.
    pub value: String,
    /// The operation to apply.
    pub operation: Operation,
    /// The second operand of a binary operation.
    pub operand: Option<String>,
    /// How chatty logging on stderr should be. 0 only shows warnings.
    pub verbosity: u64,
    /// When true, rat's stderr will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .arg(
            clap::Arg::with_name("value")
                .help("Rational to operate on, like \"2/3\", \"2.3\", or \"23\"")
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            clap::Arg::with_name("operation")
                .help("Operation to apply")
                .next_line_help(true)
                .long_help(
                    "Operation to apply. Possible values:\n\
                    \tshow:  Print the value in lowest terms.\n\
                    \tabs:   Absolute value.\n\
                    \tneg:   Negation.\n\
                    \tinv:   Reciprocal.\n\
                    \tfloor: Greatest integer not above the value.\n\
                    \tadd, sub, mul, div <operand>: Arithmetic with a second rational.\n\
                    \tcmp <operand>: -1, 0, or 1 as the value is below, at, or above the operand.\n\
                    \tpow <exponent>: Integer power.\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("show")
                .possible_values(Operation::NAMES),
        )
        .arg(
            clap::Arg::with_name("operand")
                .help("Second operand of a binary operation")
                .allow_hyphen_values(true),
        )
        .arg(
            clap::Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more to stderr. Repeat for more detail."),
        );
    let matches = parser(app)?;

    let operation = matches
        .value_of("operation")
        .unwrap_or("show")
        .parse()
        .map_err(|msg: String| clap::Error::with_description(&msg, clap::ErrorKind::InvalidValue))?;
    Ok(Opts {
        value: matches.value_of("value").unwrap_or_default().into(),
        operation,
        operand: matches.value_of("operand").map(str::to_owned),
        verbosity: matches.occurrences_of("verbose"),
        color,
    })
}

/// Output of a rat execution.
#[derive(Default, Debug)]
pub struct RatResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
}

/// Why a rat execution failed.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Rat(#[from] RatError),
    #[error("`{0}` needs an operand")]
    MissingOperand(Operation),
    #[error("`{0}` does not take an operand")]
    UnexpectedOperand(Operation),
}

/// Runs rat given some options.
pub fn run_rat(opts: Opts) -> RatResult {
    info!(
        "rat::run_rat(), value: {:?}, operation: {}, operand: {:?}",
        opts.value, opts.operation, opts.operand
    );

    match evaluate(&opts) {
        Ok(out) => {
            debug!("rat::run_rat(), result: {}", out);
            RatResult {
                code: 0,
                stdout: out,
                stderr: String::new(),
            }
        }
        Err(err) => RatResult {
            code: 1,
            stdout: String::new(),
            stderr: render_error(&err, opts.color).unwrap_or_else(|_| format!("error: {}", err)),
        },
    }
}

fn evaluate(opts: &Opts) -> Result<String, RunError> {
    let value: Rational = opts.value.parse()?;
    let op = opts.operation;

    let operand = match (op.is_binary(), opts.operand.as_deref()) {
        (true, Some(operand)) => operand,
        (true, None) => return Err(RunError::MissingOperand(op)),
        (false, None) => "",
        (false, Some(_)) => return Err(RunError::UnexpectedOperand(op)),
    };

    let out = match op {
        Operation::Show => value.to_string(),
        Operation::Abs => value.abs().to_string(),
        Operation::Neg => value.neg().to_string(),
        Operation::Inv => value.inv()?.to_string(),
        Operation::Floor => value.floor().to_string(),
        Operation::Add => value.add(operand)?.to_string(),
        Operation::Sub => value.sub(operand)?.to_string(),
        Operation::Mul => value.mul(operand)?.to_string(),
        Operation::Div => value.div(operand)?.to_string(),
        Operation::Cmp => value.compare(operand)?.to_string(),
        Operation::Pow => value.pow(operand)?.to_string(),
    };
    Ok(out)
}

/// Renders an error as `error: <message>`, with a colored prefix if requested.
fn render_error(err: &RunError, color: bool) -> io::Result<String> {
    let mut buffer = if color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };

    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(&mut buffer, "error")?;
    buffer.reset()?;
    write!(&mut buffer, ": {}", err)?;

    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}
