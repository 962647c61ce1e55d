use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

/// Keys recorded under one tag; serialized as a JSON array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TagIndex {
    pub(crate) keys: BTreeSet<String>,
}
