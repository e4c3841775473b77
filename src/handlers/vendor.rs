use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Form, Json, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};

use crate::{
    error::{AppError, Result},
    handlers::AppState,
    models::{CreatedId, CreatedResponse, NewVendor, RegisterVendorRequest, VendorProfile},
    services::uploads,
    views,
};

/// Register vendor handler
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterVendorRequest>,
) -> Result<impl IntoResponse> {
    let id = state.marketplace.register_vendor(request.into()).await?;
    let response = CreatedResponse {
        message: "Vendor registered successfully".to_string(),
        id: CreatedId::VendorId(id),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get all vendors handler
pub async fn get_vendors(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let vendors = state.marketplace.list_vendors().await?;
    Ok((StatusCode::OK, Json(vendors)))
}

pub async fn quick_registration() -> Html<String> {
    Html(views::quick_registration_page())
}

/// Register a vendor from the url-encoded quick form
pub async fn quick_registration_submit(
    State(state): State<AppState>,
    Form(request): Form<RegisterVendorRequest>,
) -> Result<Redirect> {
    state.marketplace.register_vendor(request.into()).await?;
    Ok(Redirect::to("/view_vendors"))
}

pub async fn vendor_registration() -> Html<String> {
    Html(views::vendor_registration_page())
}

/// Register a vendor from the multipart onboarding form
pub async fn vendor_registration_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect> {
    let form = OnboardingForm::read(multipart).await?;
    let mut vendor = form.to_new_vendor()?;

    if let Some((file_name, bytes)) = &form.document {
        let path = uploads::save_document(&state.config.upload_dir, file_name, bytes).await?;
        vendor.profile.document_path = Some(path);
    }

    if let Err(e) = state.marketplace.register_vendor(vendor.clone()).await {
        if let Some(path) = &vendor.profile.document_path {
            let _ = tokio::fs::remove_file(path).await;
        }
        return Err(e);
    }

    Ok(Redirect::to("/view_vendors"))
}

/// Vendor table page
pub async fn view_vendors(State(state): State<AppState>) -> Result<Html<String>> {
    let vendors = state.marketplace.list_vendors().await?;
    Ok(Html(views::vendors_page(&vendors)))
}

/// Fields of the onboarding form; repeated fields keep every value
#[derive(Debug, Default)]
struct OnboardingForm {
    fields: HashMap<String, Vec<String>>,
    document: Option<(String, Bytes)>,
}

impl OnboardingForm {
    async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            if name == "document" {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked
                if !bytes.is_empty() {
                    form.document = Some((file_name, bytes));
                }
            } else {
                let value = field.text().await?;
                form.fields.entry(name).or_default().push(value);
            }
        }

        Ok(form)
    }

    fn required(&self, name: &str) -> Result<String> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .cloned()
            .ok_or_else(|| AppError::BadRequest(format!("Missing field: {}", name)))
    }

    fn optional(&self, name: &str) -> Option<String> {
        let values: Vec<&str> = self
            .fields
            .get(name)?
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    fn to_new_vendor(&self) -> Result<NewVendor> {
        Ok(NewVendor {
            name: self.required("name")?,
            email: self.required("email")?,
            phone: self.required("phone")?,
            password: self.required("password")?,
            profile: VendorProfile {
                company_name: self.optional("company_name"),
                tax_id: self.optional("tax_id"),
                address: self.optional("address"),
                vehicle_types: self.optional("vehicle_types"),
                service_regions: self.optional("service_regions"),
                bank_details: self.optional("bank_details"),
                document_path: None,
            },
        })
    }
}
