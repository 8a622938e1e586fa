//! Vendor-facing request for the required items a price change left out

use crate::ReviewReason;
use aries_domain::{PriceChangeRequest, RequestStatus, RequiredItem};

/// Signature on outgoing vendor requests
const SIGNATURE: &str = "Best regards,\nProcurement Team";

/// A drafted message to the vendor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorNotice {
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

/// Draft the missing-information request for a request parked on missing items
///
/// Returns `None` unless the request is in human review under
/// [`ReviewReason::MissingInformation`].
pub fn missing_information_request(request: &PriceChangeRequest) -> Option<VendorNotice> {
    if request.status != RequestStatus::HumanReview
        || ReviewReason::of(request) != ReviewReason::MissingInformation
    {
        return None;
    }

    let missing: Vec<String> = request
        .missing_items
        .iter()
        .enumerate()
        .map(|(n, item)| format!("{}. {}", n + 1, item.label()))
        .collect();
    let format: Vec<String> = RequiredItem::ALL
        .iter()
        .map(|item| format!("- {}: [{}]", item.label(), item.format_hint()))
        .collect();

    let body = format!(
        "Dear {vendor} Team,\n\n\
         We are processing your price change request (Reference: {id}) and require \
         additional information to proceed.\n\n\
         Please provide the following missing details:\n\n\
         {missing}\n\n\
         Please reply to this email with the requested information at your earliest convenience.\n\n\
         Required Format:\n\
         {format}\n\n\
         Thank you for your cooperation.\n\n\
         {signature}",
        vendor = request.vendor.name,
        id = request.id,
        missing = missing.join("\n"),
        format = format.join("\n"),
        signature = SIGNATURE,
    );

    Some(VendorNotice {
        subject: format!(
            "Request for Missing Information - Price Change Request {}",
            request.id
        ),
        body,
    })
}
