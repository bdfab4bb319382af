//! Error types for the magnification engine.

use thiserror::Error;

/// Errors raised when a magnification precondition is violated.
///
/// Once buffers and the YUV cache are valid the filter itself cannot fail,
/// so every variant here describes a caller mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HqxError {
    /// The process-wide YUV cache has not been built.
    #[error("YUV cache is not initialized; call yuv::init() first")]
    CacheNotInitialized,
    /// Source buffer is shorter than `width * height`.
    #[error("source buffer holds {actual} pixels but a {width}x{height} image needs {expected}")]
    SourceTooSmall { width: usize, height: usize, expected: usize, actual: usize },
    /// Destination buffer is shorter than the magnified image.
    #[error(
        "destination buffer holds {actual} pixels but {width}x{height} at {factor}x needs {expected}"
    )]
    DestinationTooSmall {
        width: usize,
        height: usize,
        factor: usize,
        expected: usize,
        actual: usize,
    },
    /// Output dimensions do not fit the target integer type.
    #[error("output size of {width}x{height} at {factor}x overflows")]
    DimensionOverflow { width: usize, height: usize, factor: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HqxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_dimensions() {
        let err = HqxError::DestinationTooSmall {
            width: 2,
            height: 3,
            factor: 4,
            expected: 96,
            actual: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("2x3"));
        assert!(msg.contains("96"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_cache_error_mentions_init() {
        assert!(HqxError::CacheNotInitialized.to_string().contains("yuv::init"));
    }
}
