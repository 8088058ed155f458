//! Delivery shapes: requests, responses, waypoints, manifests, refunds,
//! and proof of delivery.

use crate::errors::{Result, UberDirectError};
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Accepted, no courier assigned yet.
    Pending,
    /// Courier assigned and en route to pickup.
    Pickup,
    /// Items picked up, courier moving to dropoff.
    PickupComplete,
    /// Courier moving to dropoff.
    Dropoff,
    /// Dropoff completed.
    Delivered,
    /// Cancelled by the partner or internally.
    Canceled,
    /// Cancelled and a return delivery created.
    Returned,
}

impl DeliveryStatus {
    /// Wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Pickup => "pickup",
            Self::PickupComplete => "pickup_complete",
            Self::Dropoff => "dropoff",
            Self::Delivered => "delivered",
            Self::Canceled => "canceled",
            Self::Returned => "returned",
        }
    }

    /// Whether no further transitions are expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Canceled | Self::Returned)
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approximate size of a manifest item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSize {
    /// Carried with one hand.
    Small,
    /// Needs a tote bag.
    Medium,
    /// Needs two hands.
    Large,
    /// Needs several trips to a vehicle. Restricts dispatch to cars or larger.
    Xlarge,
}

/// Item dimensions in centimeters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub depth: Option<f64>,
}

/// What the courier does on a successful delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableAction {
    /// Hand over in person.
    DeliverableActionMeetAtDoor,
    /// Leave at the door.
    DeliverableActionLeaveAtDoor,
}

/// What the courier does when the dropoff cannot be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndeliverableAction {
    /// Leave the items at the door.
    LeaveAtDoor,
    /// Return the items to the pickup.
    Return,
    /// Discard the items.
    Discard,
}

/// Action reported on an undeliverable delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UndeliverableOutcome {
    /// Items were left at the door.
    #[serde(rename = "left_at_door")]
    LeftAtDoor,
    /// Items were returned.
    #[serde(rename = "returned")]
    Returned,
    /// The delivery was not undeliverable.
    #[default]
    #[serde(rename = "")]
    Unset,
}

/// Geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// Structured waypoint address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Address {
    pub street_address_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address_2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublocality_level_1: Option<String>,
}

/// Signature capture requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureRequirement {
    /// Whether a signature is required.
    pub enabled: bool,
    /// Also collect the signer's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collect_signer_name: Option<bool>,
    /// Also collect the signer's relationship to the recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collect_signer_relationship: Option<bool>,
}

/// A barcode that must be scanned, or was scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRequirement {
    /// Encoded value.
    pub value: String,
    /// `CODE39`, `CODE39_FULL_ASCII`, `CODE128` or `QR`.
    #[serde(rename = "type")]
    pub barcode_type: String,
}

/// Pincode requirement at handoff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeRequirement {
    /// Whether a pincode is required.
    pub enabled: bool,
    /// Generated pincode. Ignored on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Package counts to verify at pickup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct PackageRequirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bag_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drink_count: Option<u32>,
}

/// Identification requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentificationRequirement {
    /// Minimum age to verify.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
}

/// Verification steps required at a waypoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequirement {
    /// Signature capture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_requirement: Option<SignatureRequirement>,
    /// Barcodes to scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<BarcodeRequirement>>,
    /// Pincode entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<PincodeRequirement>,
    /// Package counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageRequirement>,
    /// ID scanning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<IdentificationRequirement>,
    /// Picture capture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<bool>,
}

/// Captured signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct SignatureProof {
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_relationship: Option<String>,
}

/// Captured picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureProof {
    /// Image location.
    pub image_url: String,
}

/// Captured identification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationProof {
    /// Whether the ID was verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age_verified: Option<bool>,
}

/// Entered pincode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeProof {
    /// Value entered during verification.
    pub entered: String,
}

/// Proof collected at a waypoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct VerificationProof {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureProof>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<BarcodeRequirement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<PictureProof>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<IdentificationProof>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_code: Option<PincodeProof>,
    /// Where the job completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_location: Option<LatLng>,
}

/// Manifest summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestInfo {
    /// Partner reference for the manifest.
    pub reference: String,
    /// Deprecated free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value in local currency.
    pub total_value: i64,
}

/// One item being delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestItem {
    /// Description.
    pub name: String,
    /// Quantity.
    pub quantity: u32,
    /// Approximate size.
    pub size: ItemSize,
    /// Dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Price in cents, VAT free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// Weight in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// VAT percentage scaled by 1e5 (`12.5%` is `1250000`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_percentage: Option<f64>,
}

impl ManifestItem {
    /// Create an item without optional details.
    pub fn new(name: impl Into<String>, quantity: u32, size: ItemSize) -> Self {
        Self {
            name: name.into(),
            quantity,
            size,
            dimensions: None,
            price: None,
            weight: None,
            vat_percentage: None,
        }
    }
}

/// How a related delivery is associated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Relationship {
    Original,
    Returned,
    MultiOrderRelated,
}

/// A delivery sharing an association with this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RelatedDelivery {
    pub id: String,
    pub relationship: Relationship,
}

/// Refund fee code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum FeeCode {
    UberDeliveryFee,
    PartnerFee,
    PartnerTax,
}

/// Refund fee category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum FeeCategory {
    Delivery,
    Tax,
}

/// Who is liable for a refunded item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum PartyAtFault {
    Uber,
    Partner,
}

/// Refunded item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RefundItem {
    pub name: String,
    pub quantity: u32,
}

/// Refunded fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RefundFee {
    pub fee_code: FeeCode,
    pub value: i64,
    pub category: FeeCategory,
}

/// Refund breakdown for one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundOrderItem {
    /// Items refunded.
    pub refund_items: Vec<RefundItem>,
    /// Liable party.
    pub party_at_fault: PartyAtFault,
    /// Cents the partner owes its customers.
    pub partner_refund_amount: i64,
    /// Cents adjusted on the Uber invoice.
    pub uber_refund_amount: i64,
    /// Predefined reason string.
    pub reason: String,
}

/// A refund request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundData {
    /// Refund request id.
    pub id: String,
    /// Creation time, seconds since the epoch.
    pub created_at: i64,
    /// Upper-case ISO currency code.
    pub currency_code: String,
    /// Cents the partner owes its customers.
    pub total_partner_refund: i64,
    /// Cents adjusted on the Uber invoice.
    pub total_uber_refund: i64,
    /// Fee breakdown.
    pub refund_fees: Vec<RefundFee>,
    /// Per-order breakdown.
    pub refund_order_items: Vec<RefundOrderItem>,
}

/// Courier vehicle. Accepts both lower- and upper-case wire spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum VehicleType {
    #[serde(alias = "BICYCLE")]
    Bicycle,
    #[serde(alias = "CAR")]
    Car,
    #[serde(alias = "VAN")]
    Van,
    #[serde(alias = "TRUCK")]
    Truck,
    #[serde(alias = "SCOOTER")]
    Scooter,
    #[serde(alias = "MOTORCYCLE")]
    Motorcycle,
    #[serde(alias = "WALKER")]
    Walker,
}

/// Courier assigned to a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierInfo {
    /// First name and last initial.
    pub name: String,
    /// Deprecated rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Vehicle.
    pub vehicle_type: VehicleType,
    /// Masked phone number.
    pub phone_number: String,
    /// Current location.
    pub location: LatLng,
    /// Profile image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_href: Option<String>,
}

/// Waypoint outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum WaypointStatus {
    Completed,
    Failed,
}

/// Pickup, dropoff or return details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointInfo {
    /// Display name of the person or merchant.
    pub name: String,
    /// Masked phone number.
    pub phone_number: String,
    /// Address string.
    pub address: String,
    /// Structured address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_address: Option<Address>,
    /// Instructions for the courier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Instructions from the seller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_notes: Option<String>,
    /// Notes left by the courier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_notes: Option<String>,
    /// Coordinates.
    pub location: LatLng,
    /// Collected proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationProof>,
    /// Required verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_requirements: Option<VerificationRequirement>,
    /// Partner store identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_store_id: Option<String>,
    /// Waypoint outcome.
    pub status: WaypointStatus,
    /// When `status` was set.
    pub status_timestamp: DateTime<Utc>,
}

/// Robo courier cancellation reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum RoboCancelReason {
    CannotAccessCustomerLocation,
    CannotFindCustomerAddress,
    CustomerRejectedOrder,
    CustomerUnavailable,
}

/// Robo courier simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RoboCourierSpecification {
    /// Simulation mode, e.g. `auto`.
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enroute_for_pickup_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_imminent_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_imminent_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<RoboCancelReason>,
}

/// Test-mode settings. Only honored outside live mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSpecifications {
    /// Robo courier simulation.
    pub robo_courier_specification: RoboCourierSpecification,
}

/// Request body for `POST customers/{customer_id}/deliveries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct DeliveryRequest {
    pub dropoff_address: String,
    pub dropoff_name: String,
    pub dropoff_phone_number: String,
    pub manifest_items: Vec<ManifestItem>,
    pub pickup_address: String,
    pub pickup_name: String,
    pub pickup_phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliverable_action: Option<DeliverableAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_seller_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_verification: Option<VerificationRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_reference: Option<String>,
    /// Value in cents, VAT free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_total_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_verification: Option<VerificationRequirement>,
    /// Id of a previously issued quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undeliverable_action: Option<UndeliverableAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_ready_dt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_deadline_dt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_ready_dt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_deadline_dt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_id: Option<bool>,
    /// Upfront tip in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<i64>,
    /// Deduplicates creates carrying the same key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_verification: Option<VerificationRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_specifications: Option<TestSpecifications>,
}

/// Request body for `POST customers/{customer_id}/deliveries/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct UpdateDeliveryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_seller_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_verification: Option<VerificationRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_verification: Option<VerificationRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_dropoff_signature: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_id: Option<bool>,
    /// Tip in cents. Can change up to 24 hours after completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_by_customer: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_longitude: Option<f64>,
}

/// A delivery as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryResponse {
    /// Whether the delivery has finished.
    pub complete: bool,
    /// Assigned courier, present while in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier: Option<CourierInfo>,
    /// Courier is close to the next waypoint.
    pub courier_imminent: bool,
    /// Creation time.
    pub created: String,
    /// Lower-case ISO currency code.
    pub currency: String,
    /// Dropoff details.
    pub dropoff: WaypointInfo,
    /// End of the dropoff window.
    pub dropoff_deadline: String,
    /// Estimated dropoff time.
    pub dropoff_eta: String,
    /// Who received the delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_identifier: Option<String>,
    /// Start of the dropoff window.
    pub dropoff_ready: String,
    /// Partner account id.
    pub external_id: String,
    /// Fee in cents.
    pub fee: i64,
    /// Delivery id (`del_...`).
    pub id: String,
    /// Always `delivery`.
    pub kind: String,
    /// Live or test mode.
    pub live_mode: bool,
    /// Manifest summary.
    pub manifest: ManifestInfo,
    /// Items being delivered.
    pub manifest_items: Vec<ManifestItem>,
    /// Pickup details.
    pub pickup: WaypointInfo,
    /// End of the pickup window.
    pub pickup_deadline: String,
    /// Estimated pickup time.
    pub pickup_eta: String,
    /// Start of the pickup window.
    pub pickup_ready: String,
    /// Quote used at creation.
    pub quote_id: String,
    /// Refund requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund: Option<Vec<RefundData>>,
    /// Associated deliveries, such as a return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_deliveries: Option<Vec<RelatedDelivery>>,
    /// Current status.
    pub status: DeliveryStatus,
    /// Tip in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<i64>,
    /// Unauthenticated tracking page.
    pub tracking_url: String,
    /// Action taken when undeliverable.
    pub undeliverable_action: UndeliverableOutcome,
    /// Reason when undeliverable.
    pub undeliverable_reason: String,
    /// Last update time.
    pub updated: String,
    /// Alternative identifier.
    pub uuid: String,
    /// Return details.
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub return_waypoint: Option<WaypointInfo>,
}

impl DeliveryResponse {
    /// Whether the delivery has been cancelled.
    pub fn is_canceled(&self) -> bool {
        self.status == DeliveryStatus::Canceled
    }
}

/// A page of deliveries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryList {
    /// Deliveries on this page.
    pub data: Vec<DeliveryResponse>,
    /// URL of the next page.
    pub next_href: String,
    /// Always `list`.
    pub object: String,
    /// Deprecated, always `-1`.
    pub total_count: i64,
    /// URL of this request.
    pub url: String,
}

/// Waypoint a proof of delivery is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum PodWaypoint {
    Pickup,
    Dropoff,
    Return,
}

/// Kind of proof requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum PodType {
    Picture,
    Signature,
    Pincode,
}

/// Request body for the proof-of-delivery endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodRequest {
    /// Waypoint.
    pub waypoint: PodWaypoint,
    /// Proof type.
    #[serde(rename = "type")]
    pub proof_type: PodType,
}

impl PodRequest {
    /// Create a proof-of-delivery request.
    pub fn new(waypoint: PodWaypoint, proof_type: PodType) -> Self {
        Self {
            waypoint,
            proof_type,
        }
    }
}

/// Proof-of-delivery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodResponse {
    /// Base64-encoded image.
    pub document: String,
}

impl PodResponse {
    /// Decode the image bytes.
    pub fn decode_document(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(self.document.trim())
            .map_err(|e| {
                UberDirectError::InvalidPayload(format!(
                    "proof-of-delivery document is not valid base64: {e}"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("pending", DeliveryStatus::Pending)]
    #[case("pickup_complete", DeliveryStatus::PickupComplete)]
    #[case("canceled", DeliveryStatus::Canceled)]
    #[case("returned", DeliveryStatus::Returned)]
    fn test_delivery_status_wire(#[case] wire: &str, #[case] status: DeliveryStatus) {
        let parsed: DeliveryStatus = serde_json::from_value(json!(wire)).unwrap();
        assert_eq!(parsed, status);
        assert_eq!(status.as_str(), wire);
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_value::<DeliveryStatus>(json!("lost")).is_err());
    }

    #[test]
    fn test_vehicle_type_accepts_upper_case() {
        let lower: VehicleType = serde_json::from_value(json!("car")).unwrap();
        let upper: VehicleType = serde_json::from_value(json!("CAR")).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_undeliverable_outcome_empty_string() {
        let outcome: UndeliverableOutcome = serde_json::from_value(json!("")).unwrap();
        assert_eq!(outcome, UndeliverableOutcome::Unset);
    }

    #[test]
    fn test_pod_request_wire_names() {
        let request = PodRequest::new(PodWaypoint::Dropoff, PodType::Signature);
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({"waypoint": "dropoff", "type": "signature"})
        );
    }

    #[test]
    fn test_pod_decode_document() {
        let pod = PodResponse {
            document: "aGVsbG8=".into(),
        };
        assert_eq!(pod.decode_document().unwrap(), b"hello".to_vec());

        let bad = PodResponse {
            document: "%%%".into(),
        };
        assert!(matches!(
            bad.decode_document(),
            Err(UberDirectError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_delivery_request_minimal_body() {
        let request = DeliveryRequest {
            pickup_name: "Store".into(),
            pickup_address: "1 Pickup St".into(),
            pickup_phone_number: "+15555550100".into(),
            dropoff_name: "Customer".into(),
            dropoff_address: "2 Drop Ave".into(),
            dropoff_phone_number: "+15555550101".into(),
            manifest_items: vec![ManifestItem::new("Burrito", 2, ItemSize::Small)],
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["manifest_items"],
            json!([{"name": "Burrito", "quantity": 2, "size": "small"}])
        );
        assert!(value.get("quote_id").is_none());
    }

    #[test]
    fn test_waypoint_minimal_fields() {
        let waypoint = json!({
            "name": "Store",
            "phone_number": "+15555550100",
            "address": "1 Pickup St",
            "location": {"lat": 37.77, "lng": -122.41},
            "status": "completed",
            "status_timestamp": "2024-01-01T10:00:00Z"
        });
        let parsed: WaypointInfo = serde_json::from_value(waypoint).unwrap();
        assert_eq!(parsed.status, WaypointStatus::Completed);
        assert_eq!(parsed.location.lat, 37.77);
    }
}
