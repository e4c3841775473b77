use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use crate::{
    app,
    config::Config,
    db::test_support::TestDb,
    services::{Marketplace, RecordingNotifier, RfqNotice},
    AppState,
};

struct TestApp {
    router: Router,
    notifier: Arc<RecordingNotifier>,
    db: TestDb,
    upload_dir: PathBuf,
}

// Helper function to build the router on a fresh database
async fn setup_test_app() -> TestApp {
    let db = TestDb::new().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let upload_dir = std::env::temp_dir().join(format!("rfq_test_uploads_{}", Uuid::new_v4()));

    let config = Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        database_url: String::new(),
        upload_dir: upload_dir.to_string_lossy().into_owned(),
        max_connections: 5,
        status_limit: 5,
    };

    let marketplace = Marketplace::new(db.pool.clone(), notifier.clone());
    let router = app(AppState::new(marketplace, config));

    TestApp {
        router,
        notifier,
        db,
        upload_dir,
    }
}

// Helper function to clean up the database and uploads
async fn teardown_test_app(app: TestApp) {
    let _ = std::fs::remove_dir_all(&app.upload_dir);
    app.db.teardown().await;
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn post_json(router: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(router, request).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(router, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_html(router: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(router, request).await;
    (status, String::from_utf8(body).unwrap())
}

fn rfq_payload(origin: &str) -> Value {
    json!({
        "origin": origin,
        "destination": "Depot",
        "dead_weight": 12.5,
        "dimensions": "10x2x2",
        "material_type": "Timber",
        "vehicle_size": "40ft"
    })
}

async fn register_vendor(router: &Router, email: &str) -> i64 {
    let (status, body) = post_json(
        router,
        "/register",
        json!({"name": "Acme", "email": email, "phone": "123", "password": "p"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["vendor_id"].as_i64().unwrap()
}

async fn create_rfq(router: &Router, origin: &str) -> i64 {
    let (status, body) = post_json(router, "/create_rfq", rfq_payload(origin)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["rfq_id"].as_i64().unwrap()
}

async fn submit_bid(router: &Router, rfq_id: i64, vendor_id: i64, amount: f64) -> StatusCode {
    let (status, _) = post_json(
        router,
        "/submit_bid",
        json!({"rfq_id": rfq_id, "vendor_id": vendor_id, "bid_amount": amount}),
    )
    .await;
    status
}

#[cfg(test)]
mod vendor_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_then_list_vendors() {
        let app = setup_test_app().await;

        let (status, body) = post_json(
            &app.router,
            "/register",
            json!({"name": "Acme", "email": "a@x.com", "phone": "123", "password": "p"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Vendor registered successfully");
        let id = body["vendor_id"].as_i64().unwrap();

        let (status, vendors) = get_json(&app.router, "/get_vendors").await;
        assert_eq!(status, StatusCode::OK);
        let vendors = vendors.as_array().unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0]["id"], id);
        assert_eq!(vendors[0]["name"], "Acme");
        assert_eq!(vendors[0]["email"], "a@x.com");
        assert_eq!(vendors[0]["phone"], "123");
        assert!(vendors[0].get("password_hash").is_none());

        let second = register_vendor(&app.router, "b@x.com").await;
        assert!(second > id);

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let app = setup_test_app().await;
        register_vendor(&app.router, "a@x.com").await;

        let (hash,): (String,) = sqlx::query_as("SELECT password_hash FROM vendors")
            .fetch_one(&app.db.pool)
            .await
            .unwrap();
        assert_ne!(hash, "p");
        assert!(hash.starts_with("$argon2id$"));

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let app = setup_test_app().await;
        register_vendor(&app.router, "a@x.com").await;

        let (status, body) = post_json(
            &app.router,
            "/register",
            json!({"name": "Other", "email": "a@x.com", "phone": "9", "password": "q"}),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("a@x.com"));

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_missing_field_fails_fast() {
        let app = setup_test_app().await;

        let (status, _) = post_json(
            &app.router,
            "/register",
            json!({"name": "Acme", "phone": "123", "password": "p"}),
        )
        .await;
        assert!(status.is_client_error());

        let (_, vendors) = get_json(&app.router, "/get_vendors").await;
        assert!(vendors.as_array().unwrap().is_empty());

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_quick_registration_form() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/vendors")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Road+Kings&email=rk%40x.com&phone=555&password=pw"))
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/view_vendors");

        let (status, html) = get_html(&app.router, "/view_vendors").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Road Kings"));
        assert!(html.contains("rk@x.com"));

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_onboarding_form_stores_document() {
        let app = setup_test_app().await;

        let boundary = "XBOUNDARYX";
        let mut body = String::new();
        for (name, value) in [
            ("name", "Acme"),
            ("email", "fleet@x.com"),
            ("phone", "123"),
            ("password", "p"),
            ("company_name", "Acme Freight"),
            ("vehicle_types", "Truck"),
            ("vehicle_types", "Trailer"),
        ] {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"document\"; filename=\"license.pdf\"\r\nContent-Type: application/pdf\r\n\r\n%PDF-1.4\r\n--{boundary}--\r\n"
        ));

        let request = Request::builder()
            .method("POST")
            .uri("/vendor_registration")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let (_, vendors) = get_json(&app.router, "/get_vendors").await;
        let vendor = &vendors.as_array().unwrap()[0];
        assert_eq!(vendor["company_name"], "Acme Freight");
        assert_eq!(vendor["vehicle_types"], "Truck, Trailer");

        let path = vendor["document_path"].as_str().unwrap();
        assert!(path.starts_with(app.upload_dir.to_str().unwrap()));
        assert!(path.ends_with("_license.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.4");

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_oversized_upload_is_payload_too_large() {
        let app = setup_test_app().await;

        let boundary = "XBOUNDARYX";
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nAcme\r\n\
             --{boundary}\r\nContent-Disposition: form-data; name=\"document\"; filename=\"big.bin\"\r\n\r\n"
        )
        .into_bytes();
        body.extend(std::iter::repeat_n(b'a', crate::MAX_BODY_BYTES + 1));
        body.extend(format!("\r\n--{boundary}--\r\n").into_bytes());

        let request = Request::builder()
            .method("POST")
            .uri("/vendor_registration")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, _) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

        let (_, vendors) = get_json(&app.router, "/get_vendors").await;
        assert!(vendors.as_array().unwrap().is_empty());

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_onboarding_form_requires_email() {
        let app = setup_test_app().await;

        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nAcme\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/vendor_registration")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, _) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        teardown_test_app(app).await;
    }
}

#[cfg(test)]
mod rfq_tests {
    use super::*;

    #[tokio::test]
    async fn test_rfq_ids_increase_and_timestamp_is_server_side() {
        let app = setup_test_app().await;

        let before = Utc::now();
        let mut payload = rfq_payload("Berlin");
        payload["created_at"] = json!("1999-01-01T00:00:00Z");
        let (status, body) = post_json(&app.router, "/create_rfq", payload).await;
        assert_eq!(status, StatusCode::CREATED);
        let first = body["rfq_id"].as_i64().unwrap();
        assert_eq!(
            body["message"],
            format!("RFQ {} created and vendors notified", first)
        );

        let second = create_rfq(&app.router, "Hamburg").await;
        assert!(second > first);

        let (_, rows) = get_json(&app.router, "/get_rfqs").await;
        let row = &rows[0];
        assert_eq!(row[0], first);
        assert_eq!(row[1], "Berlin");
        assert_eq!(row[2], "Depot");
        assert_eq!(row[3], 12.5);
        assert_eq!(row[4], "10x2x2");
        assert_eq!(row[5], "Timber");
        assert_eq!(row[6], "40ft");
        let created_at: DateTime<Utc> = row[7].as_str().unwrap().parse().unwrap();
        assert!(created_at >= before);

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_get_rfqs_is_insertion_ordered() {
        let app = setup_test_app().await;

        let a = create_rfq(&app.router, "A").await;
        let b = create_rfq(&app.router, "B").await;

        let (status, rows) = get_json(&app.router, "/get_rfqs").await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row[0].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![a, b]);

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_every_vendor_is_notified_once() {
        let app = setup_test_app().await;

        let rfq_before_vendors = create_rfq(&app.router, "Nobody").await;
        assert!(app.notifier.notices().is_empty());
        assert!(rfq_before_vendors > 0);

        register_vendor(&app.router, "a@x.com").await;
        register_vendor(&app.router, "b@x.com").await;
        let rfq_id = create_rfq(&app.router, "Berlin").await;

        let notices = app.notifier.notices();
        assert_eq!(
            notices,
            vec![
                RfqNotice {
                    email: "a@x.com".to_string(),
                    rfq_id
                },
                RfqNotice {
                    email: "b@x.com".to_string(),
                    rfq_id
                },
            ]
        );
        assert_eq!(
            notices[0].message(),
            format!("New RFQ ID {} available for bidding.", rfq_id)
        );

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_rfq_form_rejects_non_finite_dead_weight() {
        let app = setup_test_app().await;

        for dead_weight in ["inf", "NaN"] {
            let request = Request::builder()
                .method("POST")
                .uri("/rfq_form")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!(
                    "origin=A&destination=B&dead_weight={}&dimensions=d&material_type=m&vehicle_size=v",
                    dead_weight
                )))
                .unwrap();
            let (status, _) = send(&app.router, request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", dead_weight);
        }

        let (_, rows) = get_json(&app.router, "/get_rfqs").await;
        assert!(rows.as_array().unwrap().is_empty());

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_rfq_form_creates_rfq() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/rfq_form")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "origin=Linz&destination=Graz&dead_weight=3.5&dimensions=2x2x2&material_type=Steel&vehicle_size=Van",
            ))
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/status");

        let (_, rows) = get_json(&app.router, "/get_rfqs").await;
        assert_eq!(rows[0][1], "Linz");
        assert_eq!(rows[0][3], 3.5);

        teardown_test_app(app).await;
    }
}

#[cfg(test)]
mod bid_tests {
    use super::*;

    #[tokio::test]
    async fn test_bid_is_listed_only_under_its_rfq() {
        let app = setup_test_app().await;

        let vendor = register_vendor(&app.router, "a@x.com").await;
        let rfq_a = create_rfq(&app.router, "A").await;
        let rfq_b = create_rfq(&app.router, "B").await;

        assert_eq!(submit_bid(&app.router, rfq_a, vendor, 1200.0).await, StatusCode::CREATED);

        let (status, bids) = get_json(&app.router, &format!("/get_bids/{}", rfq_a)).await;
        assert_eq!(status, StatusCode::OK);
        let bids = bids.as_array().unwrap();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0][1], rfq_a);
        assert_eq!(bids[0][2], vendor);
        assert_eq!(bids[0][3], 1200.0);

        let (_, other) = get_json(&app.router, &format!("/get_bids/{}", rfq_b)).await;
        assert!(other.as_array().unwrap().is_empty());

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_bid_on_unknown_rfq_is_accepted() {
        let app = setup_test_app().await;

        let (status, body) = post_json(
            &app.router,
            "/submit_bid",
            json!({"rfq_id": 4242, "vendor_id": 77, "bid_amount": 10.0}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Bid submitted successfully");
        assert!(body["bid_id"].as_i64().is_some());

        let (_, bids) = get_json(&app.router, "/get_bids/4242").await;
        assert_eq!(bids.as_array().unwrap().len(), 1);

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_repeated_bids_by_same_vendor_persist() {
        let app = setup_test_app().await;

        let vendor = register_vendor(&app.router, "a@x.com").await;
        let rfq_id = create_rfq(&app.router, "A").await;
        submit_bid(&app.router, rfq_id, vendor, 500.0).await;
        submit_bid(&app.router, rfq_id, vendor, 500.0).await;

        let (_, bids) = get_json(&app.router, &format!("/get_bids/{}", rfq_id)).await;
        let bids = bids.as_array().unwrap();
        assert_eq!(bids.len(), 2);
        assert_ne!(bids[0][0], bids[1][0]);

        teardown_test_app(app).await;
    }
}

#[cfg(test)]
mod page_tests {
    use super::*;

    #[tokio::test]
    async fn test_status_shows_five_newest_rfqs_first() {
        let app = setup_test_app().await;

        for i in 0..7 {
            create_rfq(&app.router, &format!("City-{}", i)).await;
        }
        submit_bid(&app.router, 1, 1, 99.0).await;

        let (status, html) = get_html(&app.router, "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("City-0"));
        assert!(!html.contains("City-1"));

        let positions: Vec<usize> = (2..7)
            .rev()
            .map(|i| html.find(&format!("City-{}", i)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("99.00"));

        teardown_test_app(app).await;
    }

    #[tokio::test]
    async fn test_static_pages_render() {
        let app = setup_test_app().await;

        for (uri, marker) in [
            ("/", "Transport RFQ Marketplace"),
            ("/vendors", "action=\"/vendors\""),
            ("/vendor_registration", "multipart/form-data"),
            ("/rfq_form", "name=\"dead_weight\""),
            ("/view_vendors", "No vendors registered yet."),
        ] {
            let (status, html) = get_html(&app.router, uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(html.contains(marker), "{}", uri);
        }

        let (status, body) = get_html(&app.router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");

        teardown_test_app(app).await;
    }
}
