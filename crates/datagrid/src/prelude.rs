//! Prelude module - common imports for datagrid users
//!
//! ```rust
//! use datagrid::prelude::*;
//! ```

pub use crate::{
    // Addressing
    parse_range,
    Address,
    AddressRange,
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
    Grid,
    Rendered,
    Result,
    // Transfers
    TransferOptions,
    TransferStats,
    Workbook,
    // Extension traits
    WorkbookTransferExt,
};
