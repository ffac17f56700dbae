// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur while resolving products.
///
/// A `MissingProduct` failure is built in two phases. At the point of
/// absence only the key and the source engine are known, so `destination`
/// starts out as `None`. While the failure bubbles up the resolution chain,
/// the first frame that directly declared a dependency on the missing key
/// fills in `destination` with its own engine id; every frame above that
/// passes the failure through unchanged. The surfaced error therefore names
/// exactly one consumer: the engine whose generator was directly blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A key had neither a registered entry nor an initial.
    MissingProduct {
        /// The key of the missing product.
        key: String,
        /// The id of the engine expected to provide the product.
        source: String,
        /// The id of the engine whose generator directly required the
        /// product. `None` until the direct consumer is identified.
        destination: Option<String>,
    },
    /// An active (engine, key) pair was re-entered during resolution.
    CycleDetected {
        /// The cycle as `engine_id:key` hops, first repeated pair included
        /// at both ends.
        path: Vec<String>,
    },
}

impl ResolveError {
    /// Fills in the destination engine if no frame below has claimed it.
    /// Cycle failures carry their own path and pass through unchanged.
    pub(crate) fn attributed_to(self, engine_id: &str) -> Self {
        match self {
            ResolveError::MissingProduct {
                key,
                source,
                destination: None,
            } => ResolveError::MissingProduct {
                key,
                source,
                destination: Some(engine_id.to_string()),
            },
            other => other,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MissingProduct {
                key,
                source,
                destination,
            } => {
                write!(
                    f,
                    "Missing product '{}': engine '{}' has no entry or initial for it",
                    key, source
                )?;
                if let Some(destination) = destination {
                    write!(f, " (required by engine '{}')", destination)?;
                }
                Ok(())
            }
            ResolveError::CycleDetected { path } => {
                write!(f, "Dependency cycle detected: {}", path.join(" -> "))
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribution_fills_unset_destination_once() {
        let err = ResolveError::MissingProduct {
            key: "k".to_string(),
            source: "a".to_string(),
            destination: None,
        };

        let attributed = err.attributed_to("b");
        assert_eq!(
            attributed,
            ResolveError::MissingProduct {
                key: "k".to_string(),
                source: "a".to_string(),
                destination: Some("b".to_string()),
            }
        );

        // Frames above the direct consumer must not overwrite it.
        let unchanged = attributed.clone().attributed_to("c");
        assert_eq!(unchanged, attributed);
    }

    #[test]
    fn cycle_passes_through_attribution() {
        let err = ResolveError::CycleDetected {
            path: vec!["a:x".to_string(), "a:x".to_string()],
        };
        assert_eq!(err.clone().attributed_to("b"), err);
    }

    #[test]
    fn display_mentions_destination_when_known() {
        let err = ResolveError::MissingProduct {
            key: "full_name".to_string(),
            source: "names".to_string(),
            destination: Some("ids".to_string()),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("full_name"));
        assert!(rendered.contains("names"));
        assert!(rendered.contains("ids"));
    }
}
