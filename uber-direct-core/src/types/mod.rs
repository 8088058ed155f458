//! Typed request, response and event shapes.

pub mod delivery;
pub mod events;
pub mod organization;
pub mod quote;

pub use delivery::{
    Address, BarcodeRequirement, CourierInfo, DeliverableAction, DeliveryList, DeliveryRequest,
    DeliveryResponse, DeliveryStatus, Dimensions, FeeCategory, FeeCode, IdentificationProof,
    IdentificationRequirement, ItemSize, LatLng, ManifestInfo, ManifestItem, PackageRequirement,
    PartyAtFault, PictureProof, PincodeProof, PincodeRequirement, PodRequest, PodResponse,
    PodType, PodWaypoint, RefundData, RefundFee, RefundItem, RefundOrderItem, RelatedDelivery,
    Relationship, RoboCancelReason, RoboCourierSpecification, SignatureProof,
    SignatureRequirement, TestSpecifications, UndeliverableAction, UndeliverableOutcome,
    UpdateDeliveryRequest, VehicleType, VerificationProof, VerificationRequirement, WaypointInfo,
    WaypointStatus,
};
pub use events::{CourierUpdateEvent, DeliveryStatusEvent, EventKind, RefundRequestEvent};
pub use organization::{
    BillingType, CreateOrganizationRequest, CreateOrganizationResponse, HierarchyInfo,
    InviteMemberRequest, InviteMemberResponse, MerchantType, OrganizationAddress,
    OrganizationDetails, OrganizationInfo, PhoneDetails, PointOfContact, Role, UserDetails,
};
pub use quote::{QuoteRequest, QuoteResponse, StructuredAddress};
