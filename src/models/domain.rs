//! Closed-set classification types: modality and maturity status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad category of diagnostic input a model consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Image studies (MRI, X-ray, dermoscopy, fundus).
    #[serde(alias = "imaging")]
    Imaging,
    /// Time-series signals (ECG).
    #[serde(alias = "signal")]
    Signal,
}

impl Modality {
    /// Returns all modality variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Imaging, Self::Signal]
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Imaging => "Imaging",
            Self::Signal => "Signal",
        }
    }

    /// Parses a modality label, ignoring case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "imaging" => Some(Self::Imaging),
            "signal" => Some(Self::Signal),
            _ => None,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maturity label of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Validated for routine preliminary support.
    #[serde(alias = "stable")]
    Stable,
    /// Usable, still collecting feedback.
    #[serde(alias = "beta")]
    Beta,
    /// Experimental.
    #[serde(alias = "research")]
    Research,
}

impl Status {
    /// Returns all status variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Stable, Self::Beta, Self::Research]
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Beta => "Beta",
            Self::Research => "Research",
        }
    }

    /// Parses a status label, ignoring case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stable" => Some(Self::Stable),
            "beta" => Some(Self::Beta),
            "research" => Some(Self::Research),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
