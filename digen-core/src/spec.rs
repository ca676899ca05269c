//! Immutable description of one dataset to generate.

use std::{num::NonZeroUsize, sync::Arc};

use crate::{density::Density, error::GraphSpecError};

/// Whether a dataset keeps its acyclic backbone or gains injected rings.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Topology {
    /// Keep the backbone only; the graph is a DAG.
    Acyclic,
    /// Inject `scc_hint` small rings on top of the backbone.
    Cyclic {
        /// Number of rings to inject.
        scc_hint: usize,
    },
}

/// Planned dataset: its name, node count, density and topology.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use digen_core::{Density, GraphSpec, Topology};
///
/// let nodes = NonZeroUsize::new(8).expect("eight is non-zero");
/// let spec = GraphSpec::new("demo", nodes, Density::Sparse, Topology::Cyclic { scc_hint: 2 });
/// assert!(spec.is_cyclic());
/// assert_eq!(spec.scc_hint(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphSpec {
    name: String,
    node_count: NonZeroUsize,
    density: Density,
    topology: Topology,
}

impl GraphSpec {
    /// Creates a spec from already validated parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        node_count: NonZeroUsize,
        density: Density,
        topology: Topology,
    ) -> Self {
        Self {
            name: name.into(),
            node_count,
            density,
            topology,
        }
    }

    /// Creates a spec from raw values.
    ///
    /// # Errors
    /// Returns [`GraphSpecError::EmptyName`] for a blank name and
    /// [`GraphSpecError::ZeroNodes`] when `node_count` is zero.
    ///
    /// # Examples
    /// ```
    /// use digen_core::{Density, GraphSpec, GraphSpecError, Topology};
    ///
    /// let err = GraphSpec::try_new("empty", 0, Density::Dense, Topology::Acyclic)
    ///     .expect_err("zero nodes must be rejected");
    /// assert!(matches!(err, GraphSpecError::ZeroNodes { .. }));
    /// ```
    pub fn try_new(
        name: &str,
        node_count: usize,
        density: Density,
        topology: Topology,
    ) -> Result<Self, GraphSpecError> {
        if name.trim().is_empty() {
            return Err(GraphSpecError::EmptyName);
        }
        let nodes = NonZeroUsize::new(node_count).ok_or_else(|| GraphSpecError::ZeroNodes {
            name: Arc::from(name),
        })?;
        Ok(Self::new(name, nodes, density, topology))
    }

    /// Dataset name, also used as the output file stem.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of nodes in the generated graph.
    #[must_use]
    pub const fn node_count(&self) -> NonZeroUsize {
        self.node_count
    }

    /// Backbone density tier.
    #[must_use]
    pub const fn density(&self) -> Density {
        self.density
    }

    /// Requested topology.
    #[must_use]
    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns `true` when rings are injected after the backbone.
    #[must_use]
    pub const fn is_cyclic(&self) -> bool {
        matches!(self.topology, Topology::Cyclic { .. })
    }

    /// Number of rings to inject; zero for acyclic specs.
    #[must_use]
    pub const fn scc_hint(&self) -> usize {
        match self.topology {
            Topology::Acyclic => 0,
            Topology::Cyclic { scc_hint } => scc_hint,
        }
    }
}
