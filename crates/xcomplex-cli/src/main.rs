use std::{env, fmt, process::ExitCode, str::FromStr};

use strum::IntoEnumIterator;
use xcomplex::{Canonical, Cell, NoopTracer, Operation, Polar, StderrTracer, Table, TableTracer, TallyTracer};

const USAGE: &str = "usage: xcomplex <add|mul|pow> [<lhs> <rhs>] [--trace] [--tally]
names: 0 -0 0i c0 1 2 -1 -2 i 1+i inf -inf infi cinf nan";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if let Some((lhs, rhs)) = options.pair {
        let result = options.operation.apply(lhs.value(), rhs.value());
        match Canonical::matching(result) {
            Some(name) => println!("{lhs} {} {rhs} = {result} = {name}", options.operation),
            None => println!("{lhs} {} {rhs} = {result}", options.operation),
        }
        return ExitCode::SUCCESS;
    }

    let operands: Vec<Canonical> = Canonical::iter().collect();
    let table = if options.trace {
        build(options.operation, &operands, &mut StderrTracer::new(), options.tally)
    } else {
        build(options.operation, &operands, &mut NoopTracer, options.tally)
    };
    print!("{}", Grid(&table));
    ExitCode::SUCCESS
}

/// Builds the table, optionally tallying result kinds on top of `tracer`.
fn build<T: TableTracer>(operation: Operation, operands: &[Canonical], tracer: &mut T, tally: bool) -> Table {
    if !tally {
        return Table::build(operation, operands, tracer);
    }
    let mut both = Both(tracer, TallyTracer::new());
    let table = Table::build(operation, operands, &mut both);
    eprintln!("{}", both.1.report());
    table
}

/// Fans events out to two tracers.
#[derive(Debug)]
struct Both<'a, A: TableTracer, B: TableTracer>(&'a mut A, B);

impl<A: TableTracer, B: TableTracer> TableTracer for Both<'_, A, B> {
    fn on_start(&mut self, operation: Operation, rows: usize, columns: usize) {
        self.0.on_start(operation, rows, columns);
        self.1.on_start(operation, rows, columns);
    }

    fn on_cell(&mut self, operation: Operation, lhs: Polar, rhs: Polar, result: Polar) {
        self.0.on_cell(operation, lhs, rhs, result);
        self.1.on_cell(operation, lhs, rhs, result);
    }

    fn on_finish(&mut self, cells: usize) {
        self.0.on_finish(cells);
        self.1.on_finish(cells);
    }
}

#[derive(Debug)]
struct Options {
    operation: Operation,
    pair: Option<(Canonical, Canonical)>,
    trace: bool,
    tally: bool,
}

#[derive(Debug)]
enum ArgError {
    MissingOperation,
    UnknownOperation(String),
    UnknownValue(String),
    /// Exactly zero or two operands are accepted.
    OperandCount(usize),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperation => write!(f, "missing operation"),
            Self::UnknownOperation(name) => write!(f, "unknown operation '{name}'"),
            Self::UnknownValue(name) => write!(f, "unknown value '{name}'"),
            Self::OperandCount(count) => write!(f, "expected 0 or 2 operands, got {count}"),
        }
    }
}

impl std::error::Error for ArgError {}

impl Options {
    fn parse(args: &[String]) -> Result<Self, ArgError> {
        let mut trace = false;
        let mut tally = false;
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--trace" => trace = true,
                "--tally" => tally = true,
                other => positional.push(other),
            }
        }

        let (&op_name, operands) = positional.split_first().ok_or(ArgError::MissingOperation)?;
        let operation = Operation::from_str(op_name).map_err(|_| ArgError::UnknownOperation(op_name.to_owned()))?;
        let pair = match operands {
            [] => None,
            [lhs, rhs] => Some((parse_value(lhs)?, parse_value(rhs)?)),
            _ => return Err(ArgError::OperandCount(operands.len())),
        };
        Ok(Self {
            operation,
            pair,
            trace,
            tally,
        })
    }
}

fn parse_value(name: &str) -> Result<Canonical, ArgError> {
    Canonical::from_str(name).map_err(|_| ArgError::UnknownValue(name.to_owned()))
}

/// Renders a table as a grid of result names, falling back to `(modulus, angle)`.
struct Grid<'a>(&'a Table);

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;
        let label = |cell: &Cell| {
            cell.named_result()
                .map_or_else(|| format!("({:.4}, {:.4})", cell.result.modulus, cell.result.angle), |c| c.to_string())
        };
        let width = table.cells().iter().map(|cell| label(cell).len()).max().unwrap_or(0).max(5);

        write!(f, "{:>6} |", table.operation())?;
        for rhs in table.operands() {
            write!(f, " {:>width$}", rhs.to_string())?;
        }
        writeln!(f)?;
        for (lhs, row) in table.operands().iter().zip(table.rows()) {
            write!(f, "{:>6} |", lhs.to_string())?;
            for cell in row {
                write!(f, " {:>width$}", label(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
