//! Required items a vendor's price change request must carry

use std::fmt;

/// An item every price change request is expected to state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredItem {
    /// Item name
    ItemName,
    /// Item or part number
    ItemNumber,
    /// Quantity
    Quantity,
    /// Unit price
    UnitPrice,
    /// Total price
    TotalPrice,
    /// Effective date of the new price
    EffectiveDate,
    /// How long the new price is valid
    ValidityPeriod,
    /// Payment terms
    PaymentTerms,
}

impl RequiredItem {
    /// Checklist order
    pub const ALL: [RequiredItem; 8] = [
        RequiredItem::ItemName,
        RequiredItem::ItemNumber,
        RequiredItem::Quantity,
        RequiredItem::UnitPrice,
        RequiredItem::TotalPrice,
        RequiredItem::EffectiveDate,
        RequiredItem::ValidityPeriod,
        RequiredItem::PaymentTerms,
    ];

    /// Get the display label
    pub fn label(&self) -> &'static str {
        match self {
            RequiredItem::ItemName => "Item Name",
            RequiredItem::ItemNumber => "Item/Part Number",
            RequiredItem::Quantity => "Quantity",
            RequiredItem::UnitPrice => "Unit Price",
            RequiredItem::TotalPrice => "Total Price",
            RequiredItem::EffectiveDate => "Effective Date",
            RequiredItem::ValidityPeriod => "Validity Period",
            RequiredItem::PaymentTerms => "Payment Terms",
        }
    }

    /// What the vendor should fill in for this item
    pub fn format_hint(&self) -> &'static str {
        match self {
            RequiredItem::ItemName => "Full product/component name",
            RequiredItem::ItemNumber => "Your internal SKU or part number",
            RequiredItem::Quantity => "Number of units",
            RequiredItem::UnitPrice => "Price per unit in USD",
            RequiredItem::TotalPrice => "Total amount",
            RequiredItem::EffectiveDate => "Date when new price takes effect",
            RequiredItem::ValidityPeriod => "How long this price will be valid",
            RequiredItem::PaymentTerms => "Net 30, Net 60, etc.",
        }
    }
}

impl fmt::Display for RequiredItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
