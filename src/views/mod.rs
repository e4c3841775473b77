//! Server-rendered HTML pages.
//!
//! Pages are built from plain strings; every value coming from the database
//! or a request goes through [`escape`] before it is interpolated.

use crate::{
    models::{Rfq, VendorDto},
    services::StatusSnapshot,
};

/// Escape text for use inside HTML element content or quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Transport RFQ</title>
</head>
<body>
<nav><a href="/">Home</a> | <a href="/rfq_form">New RFQ</a> | <a href="/vendors">Quick registration</a> | <a href="/vendor_registration">Vendor onboarding</a> | <a href="/view_vendors">Vendors</a> | <a href="/status">Status</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>"#,
        title = escape(title),
        body = body,
    )
}

fn text_input(label: &str, name: &str, kind: &str) -> String {
    format!(
        r#"<p><label>{label} <input type="{kind}" name="{name}" required></label></p>"#
    )
}

fn optional_input(label: &str, name: &str) -> String {
    format!(r#"<p><label>{label} <input type="text" name="{name}"></label></p>"#)
}

pub fn index_page() -> String {
    let body = r#"<p>Post transport requests, onboard vendors and collect bids.</p>
<ul>
<li><a href="/rfq_form">Create an RFQ</a></li>
<li><a href="/vendors">Register as a vendor</a></li>
<li><a href="/vendor_registration">Full vendor onboarding</a></li>
<li><a href="/view_vendors">Registered vendors</a></li>
<li><a href="/status">Latest RFQs and bids</a></li>
</ul>"#;
    layout("Transport RFQ Marketplace", body)
}

/// Short registration form posting url-encoded fields to `/vendors`
pub fn quick_registration_page() -> String {
    let body = [
        r#"<form method="post" action="/vendors">"#.to_string(),
        text_input("Name", "name", "text"),
        text_input("Email", "email", "email"),
        text_input("Phone", "phone", "tel"),
        text_input("Password", "password", "password"),
        r#"<p><button type="submit">Register</button></p></form>"#.to_string(),
    ]
    .join("\n");
    layout("Vendor Registration", &body)
}

/// Multipart onboarding form with a document upload
pub fn vendor_registration_page() -> String {
    let body = [
        r#"<form method="post" action="/vendor_registration" enctype="multipart/form-data">"#
            .to_string(),
        text_input("Contact name", "name", "text"),
        text_input("Email", "email", "email"),
        text_input("Phone", "phone", "tel"),
        text_input("Password", "password", "password"),
        optional_input("Company name", "company_name"),
        optional_input("Tax id", "tax_id"),
        optional_input("Address", "address"),
        r#"<fieldset><legend>Vehicle types</legend>
<label><input type="checkbox" name="vehicle_types" value="Truck"> Truck</label>
<label><input type="checkbox" name="vehicle_types" value="Trailer"> Trailer</label>
<label><input type="checkbox" name="vehicle_types" value="Container"> Container</label>
<label><input type="checkbox" name="vehicle_types" value="Van"> Van</label>
</fieldset>"#
            .to_string(),
        optional_input("Service regions", "service_regions"),
        optional_input("Bank details", "bank_details"),
        r#"<p><label>Document <input type="file" name="document"></label></p>"#.to_string(),
        r#"<p><button type="submit">Submit</button></p></form>"#.to_string(),
    ]
    .join("\n");
    layout("Vendor Onboarding", &body)
}

pub fn rfq_form_page() -> String {
    let body = [
        r#"<form method="post" action="/rfq_form">"#.to_string(),
        text_input("Origin", "origin", "text"),
        text_input("Destination", "destination", "text"),
        r#"<p><label>Dead weight (t) <input type="number" step="any" name="dead_weight" required></label></p>"#
            .to_string(),
        text_input("Dimensions", "dimensions", "text"),
        text_input("Material type", "material_type", "text"),
        text_input("Vehicle size", "vehicle_size", "text"),
        r#"<p><button type="submit">Create RFQ</button></p></form>"#.to_string(),
    ]
    .join("\n");
    layout("Create RFQ", &body)
}

fn opt(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

pub fn vendors_page(vendors: &[VendorDto]) -> String {
    if vendors.is_empty() {
        return layout("Vendors", "<p>No vendors registered yet.</p>");
    }

    let rows: String = vendors
        .iter()
        .map(|v| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                v.id,
                escape(&v.name),
                escape(&v.email),
                escape(&v.phone),
                opt(&v.company_name),
                opt(&v.vehicle_types),
                opt(&v.service_regions),
                if v.document_path.is_some() { "yes" } else { "no" },
            )
        })
        .collect();

    let body = format!(
        "<table>\n<tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>Company</th><th>Vehicles</th><th>Regions</th><th>Document</th></tr>\n{rows}</table>"
    );
    layout("Vendors", &body)
}

fn rfq_rows(rfqs: &[Rfq]) -> String {
    rfqs.iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                r.id,
                escape(&r.origin),
                escape(&r.destination),
                r.dead_weight,
                escape(&r.dimensions),
                escape(&r.material_type),
                escape(&r.vehicle_size),
                r.created_at.to_rfc3339(),
            )
        })
        .collect()
}

pub fn status_page(status: &StatusSnapshot) -> String {
    let bid_rows: String = status
        .recent_bids
        .iter()
        .map(|b| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td></tr>\n",
                b.id,
                b.rfq_id,
                b.vendor_id,
                b.bid_amount,
                b.bid_time.to_rfc3339(),
            )
        })
        .collect();

    let body = format!(
        "<h2>Recent RFQs</h2>\n<table>\n<tr><th>ID</th><th>Origin</th><th>Destination</th><th>Dead weight</th><th>Dimensions</th><th>Material</th><th>Vehicle</th><th>Created</th></tr>\n{}</table>\n\
         <h2>Recent bids</h2>\n<table>\n<tr><th>ID</th><th>RFQ</th><th>Vendor</th><th>Amount</th><th>Time</th></tr>\n{}</table>",
        rfq_rows(&status.recent_rfqs),
        bid_rows,
    );
    layout("Status", &body)
}
