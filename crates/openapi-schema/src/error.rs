//! Error types for schema decoding, transformation and text I/O.

use std::fmt;

use thiserror::Error;

use crate::pointer::format_pointer;

/// One step from a parent node to a child node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a node inside the document being decoded.
///
/// Displays as `properties.pet.items` or `allOf[1]`; the root displays as
/// `<root>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath(Vec<PathSegment>);

impl CodingPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path extended with an object key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.into()));
        Self(segments)
    }

    /// Returns a new path extended with an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the path as an RFC 6901 JSON Pointer.
    pub fn to_json_pointer(&self) -> String {
        let components: Vec<String> = self
            .0
            .iter()
            .map(|segment| match segment {
                PathSegment::Key(key) => key.clone(),
                PathSegment::Index(index) => index.to_string(),
            })
            .collect();
        format_pointer(&components)
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Failure to turn a JSON node into a schema value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodingError {
    #[error("expected a JSON object at {path}, found {found}")]
    NotAnObject { found: &'static str, path: CodingPath },

    #[error("inconsistency encountered when parsing `{subject}` at {path}: {details}")]
    Inconsistency {
        subject: &'static str,
        details: String,
        path: CodingPath,
    },

    #[error("found neither a $ref, a composition keyword, nor a `type` at {path}")]
    MissingType { path: CodingPath },

    #[error(
        "`{found}` is not a valid `type` at {path}; expected one of boolean, object, array, number, integer, string"
    )]
    UnknownType { found: String, path: CodingPath },

    #[error("missing required key `{key}` at {path}")]
    MissingKey { key: &'static str, path: CodingPath },

    #[error("expected {expected} at {path}")]
    TypeMismatch {
        expected: &'static str,
        path: CodingPath,
    },

    #[error("invalid `{subject}` at {path}: {message}")]
    Invalid {
        subject: &'static str,
        message: String,
        path: CodingPath,
    },
}

impl DecodingError {
    /// Path of the node that failed to decode.
    pub fn path(&self) -> &CodingPath {
        match self {
            Self::NotAnObject { path, .. }
            | Self::Inconsistency { path, .. }
            | Self::MissingType { path }
            | Self::UnknownType { path, .. }
            | Self::MissingKey { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::Invalid { path, .. } => path,
        }
    }
}

/// Failure of a schema transformation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("examples are not supported for `{kind}` schemas")]
    ExampleNotSupported { kind: &'static str },
}

/// Failure of the text entry points (`from_json_str`, `to_yaml_string`, ...).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Decoding(#[from] DecodingError),
}
