//! Moving sheets between connectors
//!
//! # Example
//!
//! ```rust,ignore
//! use datagrid::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let csv = workbook.add(my_csv_connector);
//! let remote = workbook.add(my_remote_connector);
//!
//! let options = TransferOptions::default();
//! let stats = workbook
//!     .transfer(csv, ("people.csv", ""), remote, ("doc-id", "People"), &options)
//!     .unwrap();
//! println!("copied {} cells", stats.cells);
//! ```

use crate::{AddressRange, Connector, Error, Grid, Result, Workbook};

/// Options for a sheet transfer
#[derive(Debug, Clone, Default)]
pub struct TransferOptions {
    /// Only copy this part of the source sheet
    pub range: Option<AddressRange>,
    /// Pad short rows with empty cells before writing
    pub make_uniform: bool,
}

impl TransferOptions {
    /// Copy only the cells of a range expression such as `"A1:D20"`
    pub fn with_range(mut self, expr: &str) -> Result<Self> {
        self.range = Some(AddressRange::parse(expr)?);
        Ok(self)
    }
}

/// Statistics from a transfer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferStats {
    /// Number of rows written
    pub rows: usize,
    /// Number of cells written
    pub cells: usize,
    /// Number of cells whose rendering is degraded
    pub degraded_cells: usize,
}

/// Read a sheet from one connector and write it to another
///
/// `source` and `dest` are `(location, sheet)` pairs.
pub fn transfer(
    from: &dyn Connector,
    source: (&str, &str),
    to: &mut dyn Connector,
    dest: (&str, &str),
    options: &TransferOptions,
) -> Result<TransferStats> {
    let grid = read(from, source, options)?;
    write(to, dest, grid)
}

fn read(
    from: &dyn Connector,
    (location, sheet): (&str, &str),
    options: &TransferOptions,
) -> Result<Grid> {
    let mut grid = match &options.range {
        Some(range) => from.read_range(location, sheet, range)?,
        None => from.read_sheet(location, sheet)?,
    };
    if options.make_uniform {
        grid.make_uniform();
    }
    Ok(grid)
}

fn write(
    to: &mut dyn Connector,
    (location, sheet): (&str, &str),
    grid: Grid,
) -> Result<TransferStats> {
    let stats = TransferStats {
        rows: grid.row_count(),
        cells: grid.rows().iter().map(Vec::len).sum(),
        degraded_cells: grid.degraded_cells().len(),
    };

    if stats.degraded_cells > 0 {
        log::warn!(
            "{} of {} cells in {location}/{sheet} will not render exactly",
            stats.degraded_cells,
            stats.cells
        );
    }

    to.write_sheet(location, sheet, &grid)?;
    log::debug!(
        "wrote {} rows ({} cells) to {} connector at {location}/{sheet}",
        stats.rows,
        stats.cells,
        to.kind()
    );
    Ok(stats)
}

/// Extension trait for moving sheets between the connectors of a workbook
pub trait WorkbookTransferExt {
    /// Copy a sheet from the connector at index `from` to the one at `to`
    ///
    /// `from` and `to` may be the same connector.
    fn transfer(
        &mut self,
        from: usize,
        source: (&str, &str),
        to: usize,
        dest: (&str, &str),
        options: &TransferOptions,
    ) -> Result<TransferStats>;
}

impl WorkbookTransferExt for Workbook {
    fn transfer(
        &mut self,
        from: usize,
        source: (&str, &str),
        to: usize,
        dest: (&str, &str),
        options: &TransferOptions,
    ) -> Result<TransferStats> {
        let reader = self
            .connector(from)
            .ok_or_else(|| Error::connector(format!("no connector at index {from}")))?;
        let grid = read(reader, source, options)?;

        let writer = self
            .connector_mut(to)
            .ok_or_else(|| Error::connector(format!("no connector at index {to}")))?;
        write(writer, dest, grid)
    }
}
