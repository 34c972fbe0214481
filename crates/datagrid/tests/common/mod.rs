//! Shared helpers for integration tests.

use datagrid::prelude::*;
use std::collections::HashMap;

/// A connector that keeps sheets in memory, keyed by (location, sheet).
#[derive(Debug)]
pub struct MemoryConnector {
    kind: ConnectorKind,
    connected: bool,
    read_only: bool,
    sheets: HashMap<(String, String), Grid>,
}

impl MemoryConnector {
    pub fn new(kind: ConnectorKind) -> Self {
        Self {
            kind,
            connected: false,
            read_only: false,
            sheets: HashMap::new(),
        }
    }

    /// Seed a sheet without going through `write_sheet`.
    pub fn with_sheet(mut self, location: &str, sheet: &str, grid: Grid) -> Self {
        self.sheets
            .insert((location.to_string(), sheet.to_string()), grid);
        self
    }

    pub fn sheet(&self, location: &str, sheet: &str) -> Option<&Grid> {
        self.sheets.get(&(location.to_string(), sheet.to_string()))
    }
}

impl Connector for MemoryConnector {
    fn kind(&self) -> ConnectorKind {
        self.kind
    }

    fn connect(&mut self, config: &ConnectionConfig) -> Result<()> {
        self.read_only = config.get_bool("read_only")?.unwrap_or(false);
        self.connected = true;
        Ok(())
    }

    fn read_sheet(&self, location: &str, sheet: &str) -> Result<Grid> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        self.sheet(location, sheet)
            .cloned()
            .ok_or_else(|| Error::SheetNotFound {
                location: location.to_string(),
                sheet: sheet.to_string(),
            })
    }

    fn write_sheet(&mut self, location: &str, sheet: &str, grid: &Grid) -> Result<()> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        if self.read_only {
            return Err(Error::connector("connector is read-only"));
        }
        self.sheets
            .insert((location.to_string(), sheet.to_string()), grid.clone());
        Ok(())
    }
}

/// A small people table with mixed value kinds.
pub fn people() -> Grid {
    Grid::from_rows(vec![
        vec![Cell::new("name"), Cell::new("age"), Cell::new("score")],
        vec![Cell::new("Ada"), Cell::new(36), Cell::with_format(91.256, "%.1f")],
        vec![Cell::new("Grace"), Cell::new(45), Cell::new(88.5)],
    ])
}
