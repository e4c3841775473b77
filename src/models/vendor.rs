use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database vendor model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub company_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub vehicle_types: Option<String>,
    pub service_regions: Option<String>,
    pub bank_details: Option<String>,
    pub document_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// JSON representation of a vendor for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub vehicle_types: Option<String>,
    pub service_regions: Option<String>,
    pub bank_details: Option<String>,
    pub document_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Vendor> for VendorDto {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name,
            email: vendor.email,
            phone: vendor.phone,
            company_name: vendor.company_name,
            tax_id: vendor.tax_id,
            address: vendor.address,
            vehicle_types: vendor.vehicle_types,
            service_regions: vendor.service_regions,
            bank_details: vendor.bank_details,
            document_path: vendor.document_path,
            created_at: vendor.created_at,
        }
    }
}

/// Basic registration request, accepted as JSON or url-encoded form
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterVendorRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Onboarding details collected by the extended registration form
#[derive(Debug, Clone, Default)]
pub struct VendorProfile {
    pub company_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub vehicle_types: Option<String>,
    pub service_regions: Option<String>,
    pub bank_details: Option<String>,
    pub document_path: Option<String>,
}

/// Everything needed to insert a vendor row
#[derive(Debug, Clone)]
pub struct NewVendor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub profile: VendorProfile,
}

impl From<RegisterVendorRequest> for NewVendor {
    fn from(request: RegisterVendorRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            password: request.password,
            profile: VendorProfile::default(),
        }
    }
}
