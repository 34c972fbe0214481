//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The typed value stored in a cell
//! - [`Address`] - A cell's location (e.g., "A1")
//! - [`Cell`] - A value plus its rendering template
//! - [`Rendered`] - The display text of a cell

pub(crate) mod address;
mod data;
mod render;
pub mod template;
mod value;

pub use address::{column_index, column_letters, Address};
pub use data::Cell;
pub use render::{render, render_default, Rendered};
pub use value::CellValue;
