//! Error types for the subnetting core.

use thiserror::Error;

/// Failures returned by the address arithmetic functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Malformed dotted-decimal address or mask.
    #[error("Invalid IPv4 address: {0}")]
    Parse(String),

    /// Prefix length outside 0..=32.
    #[error("Network length /{0} is out of range 0-32")]
    InvalidPrefix(u8),

    /// The requested subnet count needs more host bits than the block has.
    #[error("{requested} subnets need {needed} more bits but /{prefix} only has {available} left")]
    SubnetsExceedCapacity {
        requested: u64,
        prefix: u8,
        needed: u32,
        available: u32,
    },
}

pub type Result<T> = std::result::Result<T, SubnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubnetError::Parse("1.2.3".to_string()).to_string(),
            "Invalid IPv4 address: 1.2.3"
        );
        assert_eq!(
            SubnetError::InvalidPrefix(33).to_string(),
            "Network length /33 is out of range 0-32"
        );
        let err = SubnetError::SubnetsExceedCapacity {
            requested: 300,
            prefix: 24,
            needed: 9,
            available: 8,
        };
        assert_eq!(
            err.to_string(),
            "300 subnets need 9 more bits but /24 only has 8 left"
        );
    }
}
