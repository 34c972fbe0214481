//! Grid type - rows of cells

use crate::cell::{Address, Cell};
use crate::error::Result;
use crate::range::AddressRange;

/// A two-dimensional table of cells, stored row by row
///
/// Rows may have different lengths. A grid produced by a connector is
/// normally uniform (see [`Grid::is_uniform`]), but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from rows of cells
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Get the rows
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Consume the grid into its rows
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    /// Append a row
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Check if every row has the same length
    pub fn is_uniform(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|row| row.len() == first.len()),
            None => true,
        }
    }

    /// Get a cell by A1-style address (e.g., "B3")
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = Address::parse(address)?;
        Ok(self.cell_at(addr))
    }

    /// Get a cell by coordinates
    pub fn cell_at(&self, addr: Address) -> Option<&Cell> {
        self.rows.get(addr.row)?.get(addr.col)
    }

    /// Get a mutable cell by coordinates
    pub fn cell_at_mut(&mut self, addr: Address) -> Option<&mut Cell> {
        self.rows.get_mut(addr.row)?.get_mut(addr.col)
    }

    /// Set a cell by A1-style address
    pub fn set_cell<C: Into<Cell>>(&mut self, address: &str, cell: C) -> Result<()> {
        let addr = Address::parse(address)?;
        self.set_cell_at(addr, cell);
        Ok(())
    }

    /// Set a cell by coordinates
    ///
    /// Missing rows and cells up to `addr` are filled with empty cells. Only
    /// the target row is extended, so other rows keep their length.
    pub fn set_cell_at<C: Into<Cell>>(&mut self, addr: Address, cell: C) {
        if self.rows.len() <= addr.row {
            self.rows.resize_with(addr.row + 1, Vec::new);
        }
        let row = &mut self.rows[addr.row];
        if row.len() <= addr.col {
            row.resize_with(addr.col + 1, Cell::empty);
        }
        row[addr.col] = cell.into();
    }

    /// Pad every row with empty cells to the width of the longest one
    pub fn make_uniform(&mut self) {
        let width = self.width();
        for row in &mut self.rows {
            row.resize_with(width, Cell::empty);
        }
    }

    /// The smallest range containing every non-empty cell
    pub fn used_range(&self) -> Option<AddressRange> {
        let mut bounds: Option<(Address, Address)> = None;

        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let (min, max) = bounds.get_or_insert((Address::new(c, r), Address::new(c, r)));
                min.col = min.col.min(c);
                min.row = min.row.min(r);
                max.col = max.col.max(c);
                max.row = max.row.max(r);
            }
        }

        bounds.map(|(min, max)| AddressRange::new(min, max))
    }

    /// Iterate over the cells of a range (row by row)
    ///
    /// Addresses outside the grid yield `None`.
    pub fn select<'a>(
        &'a self,
        range: &AddressRange,
    ) -> impl Iterator<Item = (Address, Option<&'a Cell>)> + 'a {
        range.addresses().map(move |addr| (addr, self.cell_at(addr)))
    }

    /// Parse a range expression and collect the cells it covers
    pub fn cells_in(&self, expr: &str) -> Result<Vec<(Address, Option<&Cell>)>> {
        let range = AddressRange::parse(expr)?;
        Ok(self.select(&range).collect())
    }

    /// Copy a range out into a new grid
    ///
    /// The result is `range.height()` rows of `range.width()` cells; positions
    /// outside this grid become empty cells.
    pub fn extract(&self, range: &AddressRange) -> Grid {
        (range.start.row..=range.end.row)
            .map(|row| {
                (range.start.col..=range.end.col)
                    .map(|col| {
                        self.cell_at(Address::new(col, row))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    /// Render every cell, keeping the grid's shape
    pub fn render(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.render().text).collect())
            .collect()
    }

    /// Render every cell on the rayon thread pool
    ///
    /// Produces the same output as [`Grid::render`].
    #[cfg(feature = "parallel")]
    pub fn par_render(&self) -> Vec<Vec<String>> {
        use rayon::prelude::*;

        self.rows
            .par_iter()
            .map(|row| row.iter().map(|cell| cell.render().text).collect())
            .collect()
    }

    /// Addresses of cells whose rendering is degraded
    pub fn degraded_cells(&self) -> Vec<Address> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.render().degraded)
                    .map(move |(c, _)| Address::new(c, r))
            })
            .collect()
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::from_rows(rows)
    }
}

impl FromIterator<Vec<Cell>> for Grid {
    fn from_iter<I: IntoIterator<Item = Vec<Cell>>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn sample() -> Grid {
        Grid::from_rows(vec![
            vec![Cell::new("name"), Cell::new("qty")],
            vec![Cell::new("apple"), Cell::new(3)],
            vec![Cell::new("pear"), Cell::with_format(2.5, "%.1f kg")],
        ])
    }

    #[test]
    fn test_shape() {
        let grid = sample();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.width(), 2);
        assert!(grid.is_uniform());
        assert!(!grid.is_empty());
        assert!(Grid::new().is_uniform());
        assert!(Grid::new().is_empty());
    }

    #[test]
    fn test_cell_lookup() {
        let grid = sample();
        assert_eq!(grid.cell("B2").unwrap().unwrap().value, CellValue::Integer(3));
        assert_eq!(grid.cell_at(Address::new(0, 2)).unwrap().value, CellValue::text("pear"));
        assert!(grid.cell("Z99").unwrap().is_none());
        assert!(matches!(grid.cell("B0"), Err(Error::Format(_))));
    }

    #[test]
    fn test_set_cell_grows_ragged() {
        let mut grid = Grid::new();
        grid.set_cell("C2", Cell::new(1)).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.rows()[0].len(), 0);
        assert_eq!(grid.rows()[1].len(), 3);
        assert!(!grid.is_uniform());

        grid.make_uniform();
        assert!(grid.is_uniform());
        assert_eq!(grid.rows()[0].len(), 3);
    }

    #[test]
    fn test_used_range() {
        let mut grid = Grid::new();
        assert_eq!(grid.used_range(), None);
        grid.set_cell("B3", Cell::new("x")).unwrap();
        grid.set_cell("D2", Cell::new("y")).unwrap();
        assert_eq!(grid.used_range().unwrap().to_string(), "B2:D3");
    }

    #[test]
    fn test_cells_in_range() {
        let grid = sample();
        let cells = grid.cells_in("B1:B4").unwrap();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1].0, Address::new(1, 1));
        assert_eq!(cells[1].1.unwrap().value, CellValue::Integer(3));
        assert!(cells[3].1.is_none());
        assert!(grid.cells_in("B1").is_err());
    }

    #[test]
    fn test_extract_pads_outside_cells() {
        let grid = sample();
        let part = grid.extract(&AddressRange::parse("B2:C3").unwrap());
        assert_eq!(part.row_count(), 2);
        assert!(part.is_uniform());
        assert_eq!(part.render(), vec![vec!["3", ""], vec!["2.5 kg", ""]]);
    }

    #[test]
    fn test_render_keeps_shape() {
        let grid = sample();
        assert_eq!(
            grid.render(),
            vec![
                vec!["name", "qty"],
                vec!["apple", "3"],
                vec!["pear", "2.5 kg"],
            ]
        );
        assert!(grid.degraded_cells().is_empty());
    }

    #[test]
    fn test_degraded_cells() {
        let mut grid = sample();
        grid.set_cell("B3", Cell::with_format(2.5, "%d")).unwrap();
        grid.set_cell("A4", CellValue::unsupported("blob")).unwrap();
        assert_eq!(
            grid.degraded_cells(),
            vec![Address::new(1, 2), Address::new(0, 3)]
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_render_matches_render() {
        let grid: Grid = (0..50)
            .map(|r| (0..8).map(|c| Cell::new(r * 8 + c)).collect())
            .collect();
        assert_eq!(grid.par_render(), grid.render());
    }
}
