//! Dataset files: directory setup, JSON encoding and read-back.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    density::Density,
    error::{DatasetError, Result},
    payload::GraphPayload,
    spec::GraphSpec,
};

/// Creates `dir` and any missing parents. Succeeds if it already exists.
///
/// # Errors
/// Returns [`DatasetError::CreateDir`] when the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| DatasetError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes `payload` to `<dir>/<name>.json`, replacing any existing file.
///
/// The JSON uses two-space indentation, keeps the payload's key order and
/// ends at the closing brace. Returns the path written.
///
/// # Errors
/// Returns [`DatasetError::Write`] on I/O failure and
/// [`DatasetError::Encode`] if serialization fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use digen_core::{Edge, GraphPayload, load_payload, write_payload};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let payload = GraphPayload::new(2, vec![Edge::new(0, 1, 5)], 0);
/// let path = write_payload(dir.path(), "pair", &payload)?;
/// assert!(path.ends_with("pair.json"));
/// assert_eq!(load_payload(&path)?, payload);
/// # Ok(())
/// # }
/// ```
pub fn write_payload(dir: &Path, name: &str, payload: &GraphPayload) -> Result<PathBuf> {
    let path = dir.join(format!("{name}.json"));
    let write_error = |source| DatasetError::Write {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, payload).map_err(|source| {
        DatasetError::Encode {
            path: path.clone(),
            source,
        }
    })?;
    writer.flush().map_err(write_error)?;
    debug!(path = %path.display(), edges = payload.edge_count(), "payload written");
    Ok(path)
}

/// Reads a payload file and checks its structural guarantees.
///
/// # Errors
/// Returns [`DatasetError::Read`] if the file cannot be opened,
/// [`DatasetError::Decode`] if it is not a payload, and
/// [`DatasetError::InvalidPayload`] if [`GraphPayload::validate`] fails.
pub fn load_payload(path: &Path) -> Result<GraphPayload> {
    let file = File::open(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: GraphPayload =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DatasetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    payload
        .validate()
        .map_err(|error| DatasetError::InvalidPayload {
            path: path.to_path_buf(),
            error,
        })?;
    Ok(payload)
}

/// One row of the generation summary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatasetSummary {
    /// Dataset name (file stem).
    pub name: String,
    /// Node count.
    pub nodes: usize,
    /// Edge count.
    pub edges: usize,
    /// Backbone density tier.
    pub density: Density,
    /// Whether rings were injected.
    pub cyclic: bool,
    /// Designated source node.
    pub source: usize,
    /// File the payload was written to.
    pub path: PathBuf,
}

impl DatasetSummary {
    /// Summarises a written payload.
    #[must_use]
    pub fn new(spec: &GraphSpec, payload: &GraphPayload, path: PathBuf) -> Self {
        Self {
            name: spec.name().to_owned(),
            nodes: payload.n,
            edges: payload.edge_count(),
            density: spec.density(),
            cyclic: spec.is_cyclic(),
            source: payload.source,
            path,
        }
    }

    /// File name shown in the summary table.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// `"cyclic"` or `"DAG"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        if self.cyclic { "cyclic" } else { "DAG" }
    }
}
