//! Workbook type - a set of connectors

use crate::connector::{Connector, ConnectorKind};

/// A collection of connectors, one per source a document is spread over
#[derive(Default)]
pub struct Workbook {
    connectors: Vec<Box<dyn Connector>>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connector, returning its index
    pub fn add<C: Connector + 'static>(&mut self, connector: C) -> usize {
        self.connectors.push(Box::new(connector));
        self.connectors.len() - 1
    }

    /// Number of connectors
    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    /// Check if there are no connectors
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Get a connector by index
    pub fn connector(&self, index: usize) -> Option<&dyn Connector> {
        self.connectors.get(index).map(|c| c.as_ref())
    }

    /// Get a mutable connector by index
    pub fn connector_mut(&mut self, index: usize) -> Option<&mut (dyn Connector + 'static)> {
        self.connectors.get_mut(index).map(|c| c.as_mut())
    }

    /// Iterate over all connectors
    pub fn connectors(&self) -> impl Iterator<Item = &dyn Connector> {
        self.connectors.iter().map(|c| c.as_ref())
    }

    /// The first connector of a given kind
    pub fn find(&self, kind: ConnectorKind) -> Option<&dyn Connector> {
        self.connectors().find(|c| c.kind() == kind)
    }

    /// The first connector of a given kind, mutably
    pub fn find_mut(&mut self, kind: ConnectorKind) -> Option<&mut (dyn Connector + 'static)> {
        self.connectors
            .iter_mut()
            .find(|c| c.kind() == kind)
            .map(|c| c.as_mut())
    }
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.kind()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
