//! Trading protocol selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// Protocol used to route a buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Raydium AMM.
    Raydium,
    /// Jupiter aggregator.
    Jupiter,
    /// Pump.fun bonding curve.
    Pumpfun,
    /// Moonshot bonding curve.
    Moonshot,
    /// PumpSwap AMM.
    Pumpswap,
    /// Let the API pick the best route.
    #[default]
    Auto,
}

impl Protocol {
    /// All supported protocols.
    pub const ALL: [Protocol; 6] = [
        Protocol::Raydium,
        Protocol::Jupiter,
        Protocol::Pumpfun,
        Protocol::Moonshot,
        Protocol::Pumpswap,
        Protocol::Auto,
    ];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Raydium => "raydium",
            Self::Jupiter => "jupiter",
            Self::Pumpfun => "pumpfun",
            Self::Moonshot => "moonshot",
            Self::Pumpswap => "pumpswap",
            Self::Auto => "auto",
        }
    }

    /// Validates a protocol name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidProtocol`] for names outside [`Protocol::ALL`].
    pub fn parse(name: &str) -> Result<Self, SdkError> {
        let normalized = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| SdkError::InvalidProtocol {
                name: name.to_string(),
                accepted: Self::ALL
                    .iter()
                    .map(Protocol::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl FromStr for Protocol {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Protocol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        let cases = [
            ("raydium", Protocol::Raydium),
            ("Jupiter", Protocol::Jupiter),
            ("PUMPFUN", Protocol::Pumpfun),
            ("moonshot", Protocol::Moonshot),
            ("pumpswap", Protocol::Pumpswap),
            ("AUTO", Protocol::Auto),
        ];
        for (name, expected) in cases {
            let protocol: Protocol = name.parse().expect("valid protocol");
            assert_eq!(protocol, expected);
            assert_eq!(protocol.as_str(), name.to_lowercase());
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for name in ["invalid", "", "orca", "pump fun"] {
            let err = Protocol::parse(name).expect_err("should reject");
            assert!(matches!(err, SdkError::InvalidProtocol { .. }));
        }
    }

    #[test]
    fn test_error_lists_accepted_values() {
        let err = Protocol::parse("invalid").expect_err("should reject");
        assert_eq!(
            err.to_string(),
            "invalid protocol: invalid. Must be one of: raydium, jupiter, pumpfun, moonshot, pumpswap, auto"
        );
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Protocol::default(), Protocol::Auto);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Protocol::Pumpswap).expect("serialize");
        assert_eq!(json, "\"pumpswap\"");
    }
}
