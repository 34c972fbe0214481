//! # datagrid
//!
//! A Rust library for moving two-dimensional tabular data between
//! spreadsheet-like formats.
//!
//! Datagrid gives connectors for delimited text, workbook files and hosted
//! spreadsheets a common intermediate representation: a [`Grid`] of typed
//! [`Cell`]s. It does not ship any connector itself.
//!
//! ## Features
//!
//! - A1-style range parsing (`"A1:C10"`) into ordered cell addresses
//! - Typed cell values with printf-style rendering templates
//! - Lossy renders are reported, never silently swallowed
//! - A [`Connector`] trait and a [`Workbook`] of connectors
//! - Sheet transfers between connectors
//! - Parallel grid rendering (`parallel` feature)
//!
//! ## Example
//!
//! ```rust
//! use datagrid::prelude::*;
//!
//! let mut grid = Grid::new();
//! for (i, addr) in parse_range("A1:A3").unwrap().into_iter().enumerate() {
//!     grid.set_cell_at(addr, Cell::with_format(i as i64 + 1, "#%d"));
//! }
//!
//! assert_eq!(grid.render(), vec![vec!["#1"], vec!["#2"], vec!["#3"]]);
//! ```

pub mod prelude;
pub mod transfer;

// Re-export transfer types
pub use transfer::{transfer, TransferOptions, TransferStats, WorkbookTransferExt};

// Re-export core types
pub use datagrid_core::{
    // Addressing
    column_index,
    column_letters,
    parse_range,
    Address,
    AddressRange,
    Addresses,
    // Cell types
    Cell,
    CellValue,
    // Connectors
    ConnectionConfig,
    Connector,
    ConnectorKind,
    // Error types
    Error,
    FormatError,
    FormatErrorKind,
    Grid,
    Rendered,
    Result,
    Workbook,
};

// Re-export submodules for advanced usage
pub use datagrid_core::cell::template;
