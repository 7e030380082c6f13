use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::eligibility::eligibility_router;
use crate::eligibility::router::{county_handler, reference_handler, EligibilityState};
use crate::resolver::{ResolutionError, ZipExtractingResolver};

fn state() -> EligibilityState {
    EligibilityState {
        engine: Arc::new(engine()),
        resolver: Arc::new(ZipExtractingResolver),
    }
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn check_endpoint_returns_verdict() {
    let router = eligibility_router(Arc::new(engine()), Arc::new(ZipExtractingResolver));

    let response = router
        .oneshot(post_json(
            "/api/v1/eligibility/check",
            json!({ "zipCode": "77002", "county": "Harris", "state": "TX" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["eligible"], true);
    assert_eq!(body["reason"], "energy_community_eligible");
    assert_eq!(body["benefits"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn resolve_endpoint_extracts_zip_and_checks() {
    let router = eligibility_router(Arc::new(engine()), Arc::new(ZipExtractingResolver));

    let response = router
        .oneshot(post_json(
            "/api/v1/eligibility/resolve",
            json!({ "query": { "kind": "free_text", "text": "500 Main St, Dallas, TX 75201" } }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["address"]["zipCode"], "75201");
    assert_eq!(body["result"]["reason"], "not_energy_community");
    assert_eq!(
        body["result"]["message"],
        "Your County is not currently designated as a federal energy community."
    );
}

#[tokio::test]
async fn resolve_endpoint_uses_resolved_county() {
    let resolver = FixedResolver::returning(address("77002", "Harris", "TX"));
    let router = eligibility_router(Arc::new(engine()), Arc::new(resolver));

    let response = router
        .oneshot(post_json(
            "/api/v1/eligibility/resolve",
            json!({ "query": { "kind": "coordinates", "lat": 29.7572, "lng": -95.3636 } }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["result"]["eligible"], true);
    assert_eq!(body["result"]["county"], "Harris");
}

#[tokio::test]
async fn resolve_endpoint_maps_resolution_errors() {
    let cases: [(fn() -> ResolutionError, StatusCode); 3] = [
        (|| ResolutionError::NoZipCode, StatusCode::UNPROCESSABLE_ENTITY),
        (
            || ResolutionError::Unsupported("coordinate"),
            StatusCode::NOT_IMPLEMENTED,
        ),
        (|| ResolutionError::QuotaExceeded, StatusCode::BAD_GATEWAY),
    ];

    for (error, expected) in cases {
        let router = eligibility_router(
            Arc::new(engine()),
            Arc::new(FixedResolver::failing(error)),
        );
        let response = router
            .oneshot(post_json(
                "/api/v1/eligibility/resolve",
                json!({ "query": { "kind": "free_text", "text": "somewhere" } }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), expected);
        let body = json_body(response).await;
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn utility_endpoint_reports_unknown_zip() {
    let router = eligibility_router(Arc::new(engine()), Arc::new(ZipExtractingResolver));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/utilities/77999")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["found"], false);
    assert_eq!(body["name"], "Unknown");
    assert!(body.get("key").is_none());
}

#[tokio::test]
async fn county_handler_returns_record_fields() {
    let response = county_handler(State(state()), Path("Harris County".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["isEnergyCommunity"], true);
    assert_eq!(body["countyName"], "Harris");
    assert_eq!(body["fips"], "48201");
    assert!(body.get("reason").is_none());

    let response = county_handler(State(state()), Path("Dallas".to_string())).await;
    let body = json_body(response).await;
    assert_eq!(body["isEnergyCommunity"], false);
    assert_eq!(body["reason"], "not_qualifying_county");
}

#[tokio::test]
async fn reference_handler_summarizes_tables() {
    let response = reference_handler(State(state())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["countyCount"], 100);
    assert_eq!(body["countySource"]["notice"], "2025-31");
    assert_eq!(body["countySource"]["effectiveDate"], "2025-06-23");
    assert_eq!(body["utilityTerritories"][0], "CENTERPOINT");
}

#[tokio::test]
async fn resolve_endpoint_rejects_place_without_zip() {
    let router = eligibility_router(Arc::new(engine()), Arc::new(ZipExtractingResolver));

    let response = router
        .oneshot(post_json(
            "/api/v1/eligibility/resolve",
            json!({
                "query": {
                    "kind": "place",
                    "place": {
                        "formatted_address": "Harris County, TX, USA",
                        "address_components": [
                            { "long_name": "Harris County", "short_name": "Harris County", "types": ["administrative_area_level_2"] },
                            { "long_name": "Texas", "short_name": "TX", "types": ["administrative_area_level_1"] }
                        ]
                    }
                }
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], ResolutionError::NoZipCode.to_string());
}

#[tokio::test]
async fn resolve_endpoint_prefers_reported_county_fips() {
    let mut resolved = address("77002", "", "Texas");
    resolved.county_fips = Some("48201".to_string());
    let router = eligibility_router(
        Arc::new(engine()),
        Arc::new(FixedResolver::returning(resolved)),
    );

    let response = router
        .oneshot(post_json(
            "/api/v1/eligibility/resolve",
            json!({ "query": { "kind": "coordinates", "lat": 29.7572, "lng": -95.3636 } }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["address"]["countyFips"], "48201");
    assert_eq!(body["result"]["eligible"], true);
    assert_eq!(body["result"]["county"], "Harris");
}
