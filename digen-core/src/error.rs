//! Error types for the digen core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, io, path::PathBuf, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when a [`crate::GraphSpec`] is built from raw values.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphSpecError {
    /// Dataset names become file names and must not be blank.
    #[error("graph spec name must not be empty")]
    EmptyName,
    /// A graph needs at least one node.
    #[error("graph spec `{name}` must have at least one node")]
    ZeroNodes {
        /// Name of the offending spec.
        name: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphSpecError`] variants.
    enum GraphSpecErrorCode for GraphSpecError {
        /// Dataset names become file names and must not be blank.
        EmptyName => EmptyName => "GRAPH_SPEC_EMPTY_NAME",
        /// A graph needs at least one node.
        ZeroNodes => ZeroNodes { .. } => "GRAPH_SPEC_ZERO_NODES",
    }
}

/// Structural problem found in a [`crate::GraphPayload`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PayloadError {
    /// Payloads always describe directed graphs.
    #[error("payload must be directed")]
    Undirected,
    /// An edge endpoint fell outside `[0, n)`.
    #[error("edge {u}->{v} references a node outside 0..{n}")]
    NodeOutOfBounds {
        /// Edge tail.
        u: usize,
        /// Edge head.
        v: usize,
        /// Node count of the payload.
        n: usize,
    },
    /// An edge weight fell outside `1..=9`.
    #[error("edge {u}->{v} has weight {w} outside 1..=9")]
    WeightOutOfRange {
        /// Edge tail.
        u: usize,
        /// Edge head.
        v: usize,
        /// Offending weight.
        w: u32,
    },
    /// The same `(u, v)` pair appeared more than once.
    #[error("edge {u}->{v} appears more than once")]
    DuplicateEdge {
        /// Edge tail.
        u: usize,
        /// Edge head.
        v: usize,
    },
    /// Edges were not sorted by `(u, v, w)`.
    #[error("edge at position {index} is out of (u, v, w) order")]
    UnsortedEdges {
        /// Position of the first edge that breaks the ordering.
        index: usize,
    },
    /// The designated source was not a valid node.
    #[error("source node {node} is outside 0..{n}")]
    SourceOutOfBounds {
        /// Recorded source node.
        node: usize,
        /// Node count of the payload.
        n: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PayloadError`] variants.
    enum PayloadErrorCode for PayloadError {
        /// Payloads always describe directed graphs.
        Undirected => Undirected => "PAYLOAD_UNDIRECTED",
        /// An edge endpoint fell outside `[0, n)`.
        NodeOutOfBounds => NodeOutOfBounds { .. } => "PAYLOAD_NODE_OUT_OF_BOUNDS",
        /// An edge weight fell outside `1..=9`.
        WeightOutOfRange => WeightOutOfRange { .. } => "PAYLOAD_WEIGHT_OUT_OF_RANGE",
        /// The same `(u, v)` pair appeared more than once.
        DuplicateEdge => DuplicateEdge { .. } => "PAYLOAD_DUPLICATE_EDGE",
        /// Edges were not sorted by `(u, v, w)`.
        UnsortedEdges => UnsortedEdges { .. } => "PAYLOAD_UNSORTED_EDGES",
        /// The designated source was not a valid node.
        SourceOutOfBounds => SourceOutOfBounds { .. } => "PAYLOAD_SOURCE_OUT_OF_BOUNDS",
    }
}

/// Error raised while writing or reading dataset files.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The output directory could not be created.
    #[error("failed to create output directory `{path}`")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A dataset file could not be written.
    #[error("failed to write `{path}`")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A dataset file could not be opened for reading.
    #[error("failed to read `{path}`")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A payload could not be serialized.
    #[error("failed to encode `{path}`")]
    Encode {
        /// Destination file.
        path: PathBuf,
        /// Serializer failure.
        #[source]
        source: serde_json::Error,
    },
    /// A dataset file did not contain a payload.
    #[error("failed to decode `{path}`")]
    Decode {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser failure.
        #[source]
        source: serde_json::Error,
    },
    /// A dataset file parsed but broke a structural guarantee.
    #[error("`{path}` is not a valid payload")]
    InvalidPayload {
        /// File containing the payload.
        path: PathBuf,
        /// Structural problem found in the payload.
        #[source]
        error: PayloadError,
    },
}

define_error_codes! {
    /// Stable codes describing [`DatasetError`] variants.
    enum DatasetErrorCode for DatasetError {
        /// The output directory could not be created.
        CreateDir => CreateDir { .. } => "DATASET_CREATE_DIR",
        /// A dataset file could not be written.
        Write => Write { .. } => "DATASET_WRITE",
        /// A dataset file could not be opened for reading.
        Read => Read { .. } => "DATASET_READ",
        /// A payload could not be serialized.
        Encode => Encode { .. } => "DATASET_ENCODE",
        /// A dataset file did not contain a payload.
        Decode => Decode { .. } => "DATASET_DECODE",
        /// A dataset file parsed but broke a structural guarantee.
        InvalidPayload => InvalidPayload { .. } => "DATASET_INVALID_PAYLOAD",
    }
}

impl DatasetError {
    /// Retrieve the inner [`PayloadErrorCode`] when validation rejected a payload.
    pub const fn payload_code(&self) -> Option<PayloadErrorCode> {
        match self {
            Self::InvalidPayload { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the dataset I/O API.
pub type Result<T> = core::result::Result<T, DatasetError>;
