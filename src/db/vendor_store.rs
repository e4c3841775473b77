use chrono::Utc;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::{NewVendor, Vendor},
};

/// Vendor store for database operations
#[derive(Clone)]
pub struct VendorStore {
    pool: DbPool,
}

impl VendorStore {
    /// Create a new VendorStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a vendor and return its generated id
    pub async fn create_vendor(&self, vendor: &NewVendor, password_hash: &str) -> Result<i64> {
        let profile = &vendor.profile;
        let result = sqlx::query(
            r#"
            INSERT INTO vendors (
                name, email, phone, password_hash, company_name, tax_id, address,
                vehicle_types, service_regions, bank_details, document_path, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&vendor.name)
        .bind(&vendor.email)
        .bind(&vendor.phone)
        .bind(password_hash)
        .bind(&profile.company_name)
        .bind(&profile.tax_id)
        .bind(&profile.address)
        .bind(&profile.vehicle_types)
        .bind(&profile.service_regions)
        .bind(&profile.bank_details)
        .bind(&profile.document_path)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(format!("Vendor email {} is already registered", vendor.email))
            }
            other => AppError::Database(other),
        })?;

        let id = result.last_insert_rowid();
        tracing::debug!("Inserted vendor {}", id);
        Ok(id)
    }

    /// Get a list of all vendors in registration order
    pub async fn get_all_vendors(&self) -> Result<Vec<Vendor>> {
        let vendors = sqlx::query_as::<_, Vendor>("SELECT * FROM vendors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(vendors)
    }

    /// Get the email address of every vendor
    pub async fn get_all_emails(&self) -> Result<Vec<String>> {
        let emails: Vec<(String,)> = sqlx::query_as("SELECT email FROM vendors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(emails.into_iter().map(|(email,)| email).collect())
    }
}
