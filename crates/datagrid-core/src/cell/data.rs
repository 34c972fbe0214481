//! A grid cell: a value plus an optional rendering template

use std::fmt;

use super::render::{self, Rendered};
use super::CellValue;

/// Complete data for a single cell
///
/// `format` is a printf-style template (see [`crate::cell::template`]). When
/// it is empty the value is rendered with its type's default formatting.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// The cell's value
    pub value: CellValue,
    /// Rendering template, empty for the type default
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub format: String,
}

impl Cell {
    /// Create a new cell with a value and default formatting
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            format: String::new(),
        }
    }

    /// Create a new cell with a value and a template
    pub fn with_format<V: Into<CellValue>, S: Into<String>>(value: V, format: S) -> Self {
        Self {
            value: value.into(),
            format: format.into(),
        }
    }

    /// Create an empty cell
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if this cell has no value
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Render the cell to its display text
    ///
    /// ```
    /// use datagrid_core::Cell;
    ///
    /// assert_eq!(Cell::new(42).render().text, "42");
    /// assert_eq!(Cell::with_format(3, "n=%d").render().text, "n=3");
    ///
    /// let lossy = Cell::with_format(2.5, "%d").render();
    /// assert!(lossy.degraded);
    /// ```
    pub fn render(&self) -> Rendered {
        render::render(&self.value, &self.format)
    }
}

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Self {
        Cell::new(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_render() {
        assert_eq!(Cell::new("hello").to_string(), "hello");
        assert_eq!(Cell::new(42).to_string(), "42");
        assert_eq!(Cell::with_format(3, "n=%d").to_string(), "n=3");
        assert_eq!(Cell::empty().to_string(), "");
    }

    #[test]
    fn test_from_value() {
        let cell: Cell = CellValue::Float(3.75).into();
        assert_eq!(cell.value, CellValue::Float(3.75));
        assert!(cell.format.is_empty());
        assert_eq!(cell.render().text, "3.75");
    }

    #[test]
    fn test_render_unmodified_cell_is_stable() {
        let cell = Cell::with_format(1234.5678, "%10.2f");
        let first = cell.render();
        assert_eq!(first.text, "   1234.57");
        assert_eq!(cell.render(), first);
    }
}
