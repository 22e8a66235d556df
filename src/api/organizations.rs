//! Organization Endpoints
//!
//! `GET/POST /organizations`, `DELETE /organizations/{id}`.

use collection_view::{ApiConfig, RestSource};

use crate::models::{NewOrganization, Organization};

pub type OrganizationSource = RestSource<Organization, NewOrganization>;

pub fn organization_source(config: &ApiConfig, token: Option<&str>) -> OrganizationSource {
    RestSource::new(config, "organizations").with_bearer(token)
}
