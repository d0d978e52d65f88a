//! Pairwise result tables over named operands.
//!
//! A [`Table`] holds the result of one binary [`Operation`] for every ordered pair
//! drawn from a list of [`Canonical`] operands. Building the power table over all
//! fifteen canonical values is the quickest way to see every limiting case of the
//! extended domain at once.
//!
//! Tables can be stored with [`Table::dump`] and restored with [`Table::load`]
//! (postcard encoding), which lets a reference table be checked in and compared
//! against later builds.

use std::fmt;

use crate::{canonical::Canonical, tracer::TableTracer, value::Polar};

/// A binary operation that can be tabulated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Operation {
    #[strum(serialize = "add")]
    Add,
    #[strum(serialize = "mul")]
    Multiply,
    #[strum(serialize = "pow")]
    Power,
}

impl Operation {
    /// Applies the operation to one pair.
    #[must_use]
    pub fn apply(self, lhs: Polar, rhs: Polar) -> Polar {
        match self {
            Self::Add => lhs.add(rhs),
            Self::Multiply => lhs.multiply(rhs),
            Self::Power => lhs.power(rhs),
        }
    }
}

/// One evaluated pair.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub lhs: Canonical,
    pub rhs: Canonical,
    pub result: Polar,
}

impl Cell {
    /// The canonical name of the result, if it is exactly one of the named values.
    #[must_use]
    pub fn named_result(&self) -> Option<Canonical> {
        Canonical::matching(self.result)
    }
}

/// Results of an operation over the Cartesian product of its operands.
///
/// Cells are stored row-major: the left operand selects the row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    operation: Operation,
    operands: Vec<Canonical>,
    cells: Vec<Cell>,
}

/// Error returned when a table cannot be stored or restored.
#[derive(Debug)]
pub enum TableError {
    /// Encoding or decoding failed.
    Serialization(postcard::Error),
    /// The decoded cell count does not match the operand count.
    Shape { operands: usize, cells: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization(err) => write!(f, "table serialization failed: {err}"),
            Self::Shape { operands, cells } => {
                write!(f, "table with {operands} operands cannot hold {cells} cells")
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            Self::Shape { .. } => None,
        }
    }
}

impl From<postcard::Error> for TableError {
    fn from(err: postcard::Error) -> Self {
        Self::Serialization(err)
    }
}

impl Table {
    /// Evaluates `operation` for every ordered pair of `operands`, reporting each
    /// cell to `tracer`.
    pub fn build<T: TableTracer>(operation: Operation, operands: &[Canonical], tracer: &mut T) -> Self {
        tracer.on_start(operation, operands.len(), operands.len());
        let mut cells = Vec::with_capacity(operands.len() * operands.len());
        for &lhs in operands {
            for &rhs in operands {
                let result = operation.apply(lhs.value(), rhs.value());
                tracer.on_cell(operation, lhs.value(), rhs.value(), result);
                cells.push(Cell { lhs, rhs, result });
            }
        }
        tracer.on_finish(cells.len());
        Self {
            operation,
            operands: operands.to_vec(),
            cells,
        }
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn operands(&self) -> &[Canonical] {
        &self.operands
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows, one slice of cells per left operand.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.operands.len().max(1))
    }

    /// Looks up the result for `lhs ∘ rhs`.
    #[must_use]
    pub fn get(&self, lhs: Canonical, rhs: Canonical) -> Option<Polar> {
        let row = self.operands.iter().position(|&c| c == lhs)?;
        let col = self.operands.iter().position(|&c| c == rhs)?;
        self.cells.get(row * self.operands.len() + col).map(|cell| cell.result)
    }

    /// Serializes the table with postcard.
    pub fn dump(&self) -> Result<Vec<u8>, TableError> {
        Ok(postcard::to_allocvec(self)?)
    }

    /// Restores a table written by [`Table::dump`].
    pub fn load(bytes: &[u8]) -> Result<Self, TableError> {
        let table: Self = postcard::from_bytes(bytes)?;
        let operands = table.operands.len();
        if table.cells.len() != operands * operands {
            return Err(TableError::Shape {
                operands,
                cells: table.cells.len(),
            });
        }
        Ok(table)
    }
}
