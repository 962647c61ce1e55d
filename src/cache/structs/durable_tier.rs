use std::path::PathBuf;
use crate::cache::enums::compression_algorithm::CompressionAlgorithm;

/// Disk tier storing one file per key under `root/<hash[0..2]>/<hash>.cache`.
#[derive(Debug, Clone)]
pub struct DurableTier {
    pub(crate) root: PathBuf,
    pub(crate) compression: CompressionAlgorithm,
}
