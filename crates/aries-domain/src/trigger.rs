//! Trigger module - named conditions that put a request up for escalation

use std::fmt;

/// A condition detected on a request during triage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Sender is unknown or has a low trust score
    UnknownVendor,

    /// Vendor is a strategic partner
    StrategicVendor,

    /// Margin impact (or price increase) beyond the erosion threshold
    HighMarginImpact,

    /// Price increase beyond the significance threshold
    SignificantPriceIncrease,
}

impl Trigger {
    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::UnknownVendor => "Unknown Vendor",
            Trigger::StrategicVendor => "Strategic Vendor",
            Trigger::HighMarginImpact => "High Margin Impact",
            Trigger::SignificantPriceIncrease => "Significant Price Increase",
        }
    }

    /// Whether this trigger calls for a human on its own
    ///
    /// `StrategicVendor` is informational: it flags the relationship but
    /// says nothing about the request itself.
    pub fn is_escalating(&self) -> bool {
        !matches!(self, Trigger::StrategicVendor)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triggers in detection order, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSet(Vec<Trigger>);

impl TriggerSet {
    /// Create an empty trigger set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trigger; returns false if it was already present
    pub fn insert(&mut self, trigger: Trigger) -> bool {
        if self.0.contains(&trigger) {
            return false;
        }
        self.0.push(trigger);
        true
    }

    /// Check whether a trigger fired
    pub fn contains(&self, trigger: Trigger) -> bool {
        self.0.contains(&trigger)
    }

    /// Iterate in detection order
    pub fn iter(&self) -> impl Iterator<Item = Trigger> + '_ {
        self.0.iter().copied()
    }

    /// Number of triggers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing fired
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when at least one escalating trigger fired
    pub fn has_escalating(&self) -> bool {
        self.0.iter().any(Trigger::is_escalating)
    }

    /// Borrow as a slice
    pub fn as_slice(&self) -> &[Trigger] {
        &self.0
    }
}

impl FromIterator<Trigger> for TriggerSet {
    fn from_iter<I: IntoIterator<Item = Trigger>>(iter: I) -> Self {
        let mut set = TriggerSet::new();
        for trigger in iter {
            set.insert(trigger);
        }
        set
    }
}

impl fmt::Display for TriggerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.0.iter().map(Trigger::as_str).collect();
        f.write_str(&labels.join(", "))
    }
}
