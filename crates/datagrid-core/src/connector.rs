//! The interface format-specific readers and writers implement

use std::fmt;

use crate::config::ConnectionConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::range::AddressRange;

/// The family of format a connector speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectorKind {
    /// Delimited text such as CSV or TSV
    DelimitedText,
    /// Spreadsheet workbook files
    Workbook,
    /// A spreadsheet hosted behind a remote API
    RemoteSheet,
    /// Anything else
    Other,
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectorKind::DelimitedText => "delimited-text",
            ConnectorKind::Workbook => "workbook",
            ConnectorKind::RemoteSheet => "remote-sheet",
            ConnectorKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Reads and writes named sheets at named locations as [`Grid`]s
///
/// `location` identifies the container (a file path, a workbook id, a URL)
/// and `sheet` a table inside it. Connectors that have a single table per
/// location may ignore `sheet`.
pub trait Connector: Send {
    /// The format family of this connector
    fn kind(&self) -> ConnectorKind;

    /// Establish the connection
    fn connect(&mut self, config: &ConnectionConfig) -> Result<()>;

    /// Read a whole sheet
    fn read_sheet(&self, location: &str, sheet: &str) -> Result<Grid>;

    /// Write a grid as a sheet, replacing any previous content
    fn write_sheet(&mut self, location: &str, sheet: &str, grid: &Grid) -> Result<()>;

    /// Read part of a sheet
    ///
    /// The default reads the whole sheet and cuts the range out of it;
    /// connectors that can fetch a range directly should override this.
    fn read_range(&self, location: &str, sheet: &str, range: &AddressRange) -> Result<Grid> {
        log::trace!("reading {range} from {location}/{sheet} via full sheet read");
        Ok(self.read_sheet(location, sheet)?.extract(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::error::Error;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapConnector {
        connected: bool,
        sheets: HashMap<(String, String), Grid>,
    }

    impl Connector for MapConnector {
        fn kind(&self) -> ConnectorKind {
            ConnectorKind::Other
        }

        fn connect(&mut self, config: &ConnectionConfig) -> Result<()> {
            config.require("name")?;
            self.connected = true;
            Ok(())
        }

        fn read_sheet(&self, location: &str, sheet: &str) -> Result<Grid> {
            if !self.connected {
                return Err(Error::NotConnected);
            }
            self.sheets
                .get(&(location.to_string(), sheet.to_string()))
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
            self.sheets
                .insert((location.to_string(), sheet.to_string()), grid.clone());
            Ok(())
        }
    }

    #[test]
    fn test_connect_requires_config() {
        let mut conn = MapConnector::default();
        assert!(matches!(
            conn.connect(&ConnectionConfig::new()),
            Err(Error::MissingConfig(_))
        ));
        assert!(matches!(conn.read_sheet("book", "s"), Err(Error::NotConnected)));
        conn.connect(&ConnectionConfig::new().with("name", "mem"))
            .unwrap();
        assert!(matches!(
            conn.read_sheet("book", "s"),
            Err(Error::SheetNotFound { .. })
        ));
    }

    #[test]
    fn test_default_read_range() {
        let mut conn = MapConnector::default();
        conn.connect(&ConnectionConfig::new().with("name", "mem"))
            .unwrap();

        let grid: Grid = (1..=3)
            .map(|r| (1..=3).map(|c| Cell::new(r * 10 + c)).collect())
            .collect();
        conn.write_sheet("book", "data", &grid).unwrap();

        let range = AddressRange::parse("B2:C3").unwrap();
        let part = conn.read_range("book", "data", &range).unwrap();
        assert_eq!(part.render(), vec![vec!["22", "23"], vec!["32", "33"]]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ConnectorKind::DelimitedText.to_string(), "delimited-text");
        assert_eq!(ConnectorKind::RemoteSheet.to_string(), "remote-sheet");
    }
}
