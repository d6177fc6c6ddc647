//! Tree parameters shared by the party building round commitments and the
//! parties checking receipts against them.
//!
//! [`TreeParams`] is validated on construction; the only way to obtain one is
//! through [`TreeParamsBuilder::build`] or by deserialising a document, which
//! runs the same checks.
//!
//! | Field | Default |
//! |-------|---------|
//! | `hash` | [`HashFamily::Keccak256`] |
//! | `maxLeaves` | `1 << 20` |

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::HashFamily;

/// Default cap on the number of leaves in a single tree.
pub const DEFAULT_MAX_LEAVES: u32 = 1 << 20;

/// Validated tree parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TreeParamsBuilder")]
pub struct TreeParams {
    hash: HashFamily,
    max_leaves: u32,
}

impl TreeParams {
    pub fn hash(&self) -> HashFamily {
        self.hash
    }

    /// Largest leaf set accepted by [`MerkleTree::build_with`](crate::merkle::MerkleTree::build_with).
    pub fn max_leaves(&self) -> u32 {
        self.max_leaves
    }

    /// Parses and validates a JSON parameter document. Missing fields take
    /// their defaults; unknown fields are rejected.
    pub fn from_json(document: &str) -> Result<Self, ParamsError> {
        serde_json::from_str(document).map_err(|err| ParamsError::Malformed(err.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ParamsError> {
        serde_json::to_string_pretty(self).map_err(|err| ParamsError::Malformed(err.to_string()))
    }
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            hash: HashFamily::default(),
            max_leaves: DEFAULT_MAX_LEAVES,
        }
    }
}

/// Builder used to assemble [`TreeParams`] with validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TreeParamsBuilder {
    pub hash: HashFamily,
    pub max_leaves: u32,
}

impl TreeParamsBuilder {
    /// Returns a builder initialised with the defaults listed in the module
    /// documentation.
    pub fn new() -> Self {
        let defaults = TreeParams::default();
        Self {
            hash: defaults.hash,
            max_leaves: defaults.max_leaves,
        }
    }

    pub fn for_family(hash: HashFamily) -> Self {
        Self {
            hash,
            ..Self::new()
        }
    }

    pub fn build(&self) -> Result<TreeParams, ParamsError> {
        if self.max_leaves == 0 {
            return Err(ParamsError::ZeroMaxLeaves);
        }
        Ok(TreeParams {
            hash: self.hash,
            max_leaves: self.max_leaves,
        })
    }
}

impl Default for TreeParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<TreeParamsBuilder> for TreeParams {
    type Error = ParamsError;

    fn try_from(builder: TreeParamsBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Errors surfaced while building or loading [`TreeParams`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// `max_leaves` must allow at least one leaf.
    ZeroMaxLeaves,
    /// The parameter document could not be parsed.
    Malformed(String),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::ZeroMaxLeaves => write!(f, "max_leaves must be at least 1"),
            ParamsError::Malformed(reason) => write!(f, "malformed tree parameters: {}", reason),
        }
    }
}

impl std::error::Error for ParamsError {}
