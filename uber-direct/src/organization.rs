//! Direct organization management.

use std::sync::Arc;

use uber_direct_auth::{ApiTransport, AuthClient, Method};
use uber_direct_core::types::{
    CreateOrganizationRequest, CreateOrganizationResponse, InviteMemberRequest,
    InviteMemberResponse, OrganizationDetails,
};
use uber_direct_core::Result;
use uber_direct_schema::{Checked, ValidationGate};

use crate::daas::to_body;

/// Client for `direct/organizations`.
#[derive(Debug)]
pub struct OrganizationClient<T: ApiTransport = AuthClient> {
    transport: Arc<T>,
    gate: ValidationGate,
}

impl<T: ApiTransport> Clone for OrganizationClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            gate: self.gate.clone(),
        }
    }
}

impl<T: ApiTransport> OrganizationClient<T> {
    /// Create a client over `transport`.
    pub fn new(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Create a client over a shared transport.
    pub fn from_shared(transport: Arc<T>) -> Self {
        Self {
            transport,
            gate: ValidationGate::default(),
        }
    }

    /// Validate responses through `gate`.
    #[must_use]
    pub fn with_gate(mut self, gate: ValidationGate) -> Self {
        self.gate = gate;
        self
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Fetch an organization.
    pub async fn organization_details(&self, org_id: &str) -> Result<Checked<OrganizationDetails>> {
        let path = format!("direct/organizations/{org_id}");
        let value = self.transport.request(Method::GET, &path, None).await?;
        self.gate.check(value)
    }

    /// Create a child organization.
    pub async fn create_organization(
        &self,
        request: &CreateOrganizationRequest,
    ) -> Result<Checked<CreateOrganizationResponse>> {
        let value = self
            .transport
            .request(Method::POST, "direct/organizations", Some(to_body(request)?))
            .await?;
        self.gate.check(value)
    }

    /// Invite a user into an organization.
    pub async fn invite_member(
        &self,
        org_id: &str,
        request: &InviteMemberRequest,
    ) -> Result<Checked<InviteMemberResponse>> {
        let path = format!("direct/organizations/{org_id}/memberships/invite");
        let value = self
            .transport
            .request(Method::POST, &path, Some(to_body(request)?))
            .await?;
        self.gate.check(value)
    }
}
