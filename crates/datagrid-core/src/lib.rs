//! # datagrid-core
//!
//! Core data structures for the datagrid tabular interchange library.
//!
//! This crate provides the fundamental types shared by format connectors:
//! - [`Address`] and [`AddressRange`] - Cell addressing and A1-style ranges
//! - [`CellValue`] and [`Cell`] - Typed values with optional rendering templates
//! - [`Grid`] - Rows of cells
//! - [`Connector`] - The interface format-specific readers/writers implement
//!
//! ## Example
//!
//! ```rust
//! use datagrid_core::{parse_range, Address, Cell, Grid};
//!
//! let cells = parse_range("A1:A3").unwrap();
//! assert_eq!(cells, vec![Address::new(0, 0), Address::new(0, 1), Address::new(0, 2)]);
//!
//! let mut grid = Grid::new();
//! grid.set_cell("A1", Cell::new("total")).unwrap();
//! grid.set_cell("B1", Cell::with_format(12.5, "%.2f")).unwrap();
//! assert_eq!(grid.render(), vec![vec!["total", "12.50"]]);
//! ```

pub mod cell;
pub mod config;
pub mod connector;
pub mod error;
pub mod grid;
pub mod range;
pub mod workbook;

// Re-exports for convenience
pub use cell::{column_index, column_letters, Address, Cell, CellValue, Rendered};
pub use config::ConnectionConfig;
pub use connector::{Connector, ConnectorKind};
pub use error::{Error, FormatError, FormatErrorKind, Result};
pub use grid::Grid;
pub use range::{parse_range, AddressRange, Addresses};
pub use workbook::Workbook;
