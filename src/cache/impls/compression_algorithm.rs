use std::fmt;
use crate::cache::enums::compression_algorithm::CompressionAlgorithm;
use crate::cache::errors::CacheError;

const ZSTD_LEVEL: i32 = 3;

impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionAlgorithm::none => write!(f, "none"),
            CompressionAlgorithm::lz4 => write!(f, "lz4"),
            CompressionAlgorithm::zstd => write!(f, "zstd"),
        }
    }
}

impl CompressionAlgorithm {
    pub fn as_byte(&self) -> u8 {
        match self {
            CompressionAlgorithm::none => 0,
            CompressionAlgorithm::lz4 => 1,
            CompressionAlgorithm::zstd => 2,
        }
    }

    pub fn from_byte(value: u8) -> Result<CompressionAlgorithm, CacheError> {
        match value {
            0 => Ok(CompressionAlgorithm::none),
            1 => Ok(CompressionAlgorithm::lz4),
            2 => Ok(CompressionAlgorithm::zstd),
            other => Err(CacheError::SerializationError(format!("unknown compression marker {other}"))),
        }
    }

    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CacheError> {
        match self {
            CompressionAlgorithm::none => Ok(data.to_vec()),
            CompressionAlgorithm::lz4 => Ok(lz4_flex::compress_prepend_size(data)),
            CompressionAlgorithm::zstd => zstd::encode_all(data, ZSTD_LEVEL)
                .map_err(|e| CacheError::SerializationError(format!("zstd compression failed: {e}"))),
        }
    }

    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CacheError> {
        match self {
            CompressionAlgorithm::none => Ok(data.to_vec()),
            CompressionAlgorithm::lz4 => lz4_flex::decompress_size_prepended(data)
                .map_err(|e| CacheError::SerializationError(format!("lz4 decompression failed: {e}"))),
            CompressionAlgorithm::zstd => zstd::decode_all(data)
                .map_err(|e| CacheError::SerializationError(format!("zstd decompression failed: {e}"))),
        }
    }
}
