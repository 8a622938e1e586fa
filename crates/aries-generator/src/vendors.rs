//! Vendor fixture directory

use aries_domain::{Vendor, VendorCategory};

/// The demo vendor directory
///
/// Mixes strategic, non-strategic and unknown senders. `NewVendor Co.` is
/// unknown with a trust score just under the default untrusted threshold.
pub fn default_vendors() -> Vec<Vendor> {
    vec![
        Vendor::new("Apex Materials Inc.", VendorCategory::Strategic, 92.0),
        Vendor::new("GlobalTech Supplies", VendorCategory::Strategic, 88.0),
        Vendor::new("QuickSource Ltd.", VendorCategory::NonStrategic, 75.0),
        Vendor::new("Premier Components", VendorCategory::Strategic, 95.0),
        Vendor::new("Unknown Sender", VendorCategory::Unknown, 0.0),
        Vendor::new("FastTrack Logistics", VendorCategory::NonStrategic, 68.0),
        Vendor::new("Innovate Materials", VendorCategory::NonStrategic, 72.0),
        Vendor::new("CoreSupply Partners", VendorCategory::Strategic, 85.0),
        Vendor::new("NewVendor Co.", VendorCategory::Unknown, 45.0),
        Vendor::new("TrustWorth Industries", VendorCategory::NonStrategic, 82.0),
    ]
}
