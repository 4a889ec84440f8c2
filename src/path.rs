//! Collection paths.
//!
//! A [`CollectionPath`] is kept as separate segments so the client can
//! encode each one on its own. Fixed segments come from the data source;
//! ID segments come from user arguments and may contain any character.
//!
//! ```
//! use ecloud_provider::path::CollectionPath;
//!
//! let path = CollectionPath::new("/ecloud/v2/instances")
//!     .with_id("instance_id", "../vpn-services")
//!     .join("credentials");
//!
//! assert_eq!(path.to_string(), "/ecloud/v2/instances/..%2Fvpn-services/credentials");
//! assert!(path.check().is_ok());
//! ```

use std::fmt;

use crate::error::ProviderError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Fixed(String),
    Id {
        attribute: &'static str,
        value: String,
    },
}

impl Segment {
    fn as_str(&self) -> &str {
        match self {
            Segment::Fixed(s) => s,
            Segment::Id { value, .. } => value,
        }
    }
}

/// Path of a listable collection, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPath {
    segments: Vec<Segment>,
}

impl CollectionPath {
    /// A fixed path such as `/ecloud/v2/tags`. Empty segments are dropped.
    pub fn new(path: &str) -> Self {
        Self {
            segments: Vec::new(),
        }
        .join(path)
    }

    /// Append fixed segments.
    pub fn join(mut self, path: &str) -> Self {
        self.segments.extend(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(|s| Segment::Fixed(s.to_string())),
        );
        self
    }

    /// Append one segment taken from the `attribute` argument. The value is
    /// never split, so `/`, `?` and `#` stay inside the segment.
    pub fn with_id(mut self, attribute: &'static str, value: impl Into<String>) -> Self {
        self.segments.push(Segment::Id {
            attribute,
            value: value.into(),
        });
        self
    }

    /// Reject ID segments that cannot name a single resource.
    pub fn check(&self) -> Result<(), ProviderError> {
        for segment in &self.segments {
            if let Segment::Id { attribute, value } = segment {
                if value.trim().is_empty() || value == "." || value == ".." {
                    return Err(ProviderError::Validation(format!(
                        "{} must be a non-empty identifier, got '{}'",
                        attribute, value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Raw segments, unencoded.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(Segment::as_str)
    }
}

impl From<&str> for CollectionPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in self.segments() {
            write!(f, "/{}", urlencoding::encode(segment))?;
        }
        Ok(())
    }
}
