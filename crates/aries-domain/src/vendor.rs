//! Vendor module - who is asking for the price change

use std::fmt;

/// Vendor classification as known to the procurement directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorCategory {
    /// Long-term partner with negotiated terms
    Strategic,

    /// Known supplier without a strategic agreement
    NonStrategic,

    /// Sender not found in the vendor directory
    Unknown,
}

impl VendorCategory {
    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorCategory::Strategic => "Strategic",
            VendorCategory::NonStrategic => "Non-Strategic",
            VendorCategory::Unknown => "Unknown",
        }
    }

    /// Parse a category from a label (case-insensitive, `-`/`_`/space tolerant)
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "strategic" => Some(VendorCategory::Strategic),
            "nonstrategic" => Some(VendorCategory::NonStrategic),
            "unknown" => Some(VendorCategory::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VendorCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid vendor category: {}", s))
    }
}

/// A vendor as seen by the triage engine
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    /// Vendor (or claimed sender) name
    pub name: String,

    /// Directory classification
    pub category: VendorCategory,

    /// Trust score in [0, 100]
    pub trust_score: f64,
}

impl Vendor {
    /// Create a new vendor
    pub fn new(name: impl Into<String>, category: VendorCategory, trust_score: f64) -> Self {
        Self {
            name: name.into(),
            category,
            trust_score,
        }
    }
}
