//! Hardware probe port for host identification.
//!
//! This port abstracts hardware identification (sysctl / IOKit queries,
//! caching) from the core domain. Implementations live in adapters; the
//! core only consumes the identifiers they report.
//!
//! # Design Notes
//!
//! - Core owns the trait and the [`HostIdentifiers`] value (pure)
//! - Adapters own the probing; any identifier may be unreported
//! - Compatibility checks treat an absent identifier as "check does not
//!   apply", so probing failures never make a product incompatible

/// Hardware identifiers of the current host.
///
/// Every field is optional: which identifiers exist depends on the hardware
/// generation (board IDs on Intel, device IDs on Apple silicon and Intel
/// T2), and a probe may fail to report any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostIdentifiers {
    /// Boot-ROM board ID (Intel), e.g. "Mac-7BA5B2D9E42DDD94".
    pub board_id: Option<String>,
    /// Bridge/SoC device ID (Apple silicon or Intel T2), e.g. "J316sAP".
    pub device_id: Option<String>,
    /// Model identifier, e.g. "MacBookPro18,1".
    pub model_identifier: Option<String>,
}

impl HostIdentifiers {
    /// Create host identifiers with nothing reported.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board ID.
    #[must_use]
    pub fn with_board_id(mut self, board_id: impl Into<String>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }

    /// Set the device ID.
    #[must_use]
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model_identifier(mut self, model_identifier: impl Into<String>) -> Self {
        self.model_identifier = Some(model_identifier.into());
        self
    }
}

/// Port for identifying the current host's hardware.
///
/// Implementations perform the actual hardware queries and may cache the
/// results. The core domain uses this trait to remain pure and testable.
pub trait HardwareProbePort: Send + Sync {
    /// Report the current host's hardware identifiers.
    ///
    /// Identifiers the probe cannot determine are left as `None`.
    fn host_identifiers(&self) -> HostIdentifiers;
}
