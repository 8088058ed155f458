//! Direct organization management shapes.

use serde::{Deserialize, Serialize};

/// Business category of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum MerchantType {
    MerchantTypeRestaurant,
    MerchantTypeGrocery,
    MerchantTypeLiquor,
    MerchantTypeRetail,
    MerchantTypeEssentials,
    MerchantTypePharmacy,
    MerchantTypeSpecialtyFood,
    MerchantTypeFlower,
    MerchantTypePetSupply,
}

/// Whether billing is handled by the parent or by each organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum BillingType {
    BillingTypeCentralized,
    BillingTypeDecentralized,
}

/// Organization address. Every line is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct OrganizationAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_iso2: Option<String>,
}

/// Phone number split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct PhoneDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub country_code: String,
    pub subscriber_number: String,
}

/// Contact person for an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct PointOfContact {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_details: Option<PhoneDetails>,
}

/// Descriptive information about an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct OrganizationInfo {
    pub name: String,
    pub merchant_type: MerchantType,
    pub point_of_contact: PointOfContact,
    pub billing_type: BillingType,
    pub address: OrganizationAddress,
}

/// Position of an organization in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyInfo {
    /// Parent organization id.
    pub parent_organization_id: String,
}

/// Response of `GET direct/organizations/{org_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct OrganizationDetails {
    pub organization_id: String,
    pub info: OrganizationInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_info: Option<HierarchyInfo>,
}

/// Request body for `POST direct/organizations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct CreateOrganizationRequest {
    pub info: OrganizationInfo,
    pub hierarchy_info: HierarchyInfo,
}

/// Response of `POST direct/organizations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct CreateOrganizationResponse {
    pub organization_id: String,
    pub info: OrganizationInfo,
    pub hierarchy_info: HierarchyInfo,
}

/// Membership role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum Role {
    RoleAdmin,
    RoleEmployee,
}

/// A user being invited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct UserDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_details: Option<PhoneDetails>,
}

/// Request body for the membership invite endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct InviteMemberRequest {
    pub user_details: UserDetails,
    pub roles: Vec<Role>,
}

/// Response of the membership invite endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct InviteMemberResponse {
    pub membership_id: String,
    pub organization_id: String,
    pub user_details: UserDetails,
    pub roles: Vec<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(MerchantType::MerchantTypeSpecialtyFood).unwrap(),
            json!("MERCHANT_TYPE_SPECIALTY_FOOD")
        );
        assert_eq!(
            serde_json::to_value(BillingType::BillingTypeCentralized).unwrap(),
            json!("BILLING_TYPE_CENTRALIZED")
        );
        assert_eq!(serde_json::to_value(Role::RoleAdmin).unwrap(), json!("ROLE_ADMIN"));
    }

    #[test]
    fn test_details_without_hierarchy() {
        let details: OrganizationDetails = serde_json::from_value(json!({
            "organization_id": "org_1",
            "info": {
                "name": "Acme",
                "merchant_type": "MERCHANT_TYPE_RETAIL",
                "point_of_contact": {"email": "ops@acme.test"},
                "billing_type": "BILLING_TYPE_DECENTRALIZED",
                "address": {"city": "Austin"}
            }
        }))
        .unwrap();
        assert!(details.hierarchy_info.is_none());
        assert_eq!(details.info.address.city.as_deref(), Some("Austin"));
    }
}
