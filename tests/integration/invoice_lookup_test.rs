// GET /invoices/{file}: invoices computed from stored cart files

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use serde_json::Value;

use helpers::*;

async fn get(dir: &std::path::Path, uri: &str) -> (u16, Value) {
    let app = test::init_service(
        App::new().configure(eco_invoice::configure_app(test_service(dir))),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn test_stored_cart_is_invoiced() {
    let dir = scratch_dir();
    write_json(&dir, "pedido-ana", &TestDataFactory::discounted_payload());

    let (status, body) = get(&dir, "/invoices/pedido-ana").await;
    assert_eq!(status, 200);
    assert!(body["ticket"]
        .as_str()
        .unwrap()
        .contains("💶 TOTAL A PAGAR: 137.94€"));
}

#[actix_web::test]
async fn test_legacy_route_accepts_json_suffix() {
    let dir = scratch_dir();
    write_json(&dir, "pedido", &TestDataFactory::legacy_payload());

    let (status, body) = get(&dir, "/factura/pedido.json").await;
    assert_eq!(status, 200);
    assert!(body["ticket"].as_str().unwrap().contains("👤 Cliente: ANA"));
}

#[actix_web::test]
async fn test_missing_file_is_not_found() {
    let dir = scratch_dir();

    let (status, body) = get(&dir, "/invoices/nope").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], 404);
}

#[actix_web::test]
async fn test_unsafe_name_rejected() {
    let dir = scratch_dir();

    let (status, _) = get(&dir, "/invoices/..secret").await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn test_stored_cart_short_on_stock() {
    let dir = scratch_dir();
    write_json(&dir, "lapices", &TestDataFactory::short_stock_payload());

    let (status, body) = get(&dir, "/invoices/lapices").await;
    assert_eq!(status, 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Insufficient stock"));
}

#[actix_web::test]
async fn test_corrupt_file_is_client_error() {
    let dir = scratch_dir();
    std::fs::write(dir.join("roto.json"), b"{ not json").unwrap();

    let (status, _) = get(&dir, "/invoices/roto").await;
    assert_eq!(status, 400);
}

#[::core::prelude::v1::test]
fn test_scratch_dir_removed_on_drop() {
    let dir = scratch_dir();
    write_json(&dir, "pedido", &TestDataFactory::discounted_payload());
    let path = dir.path().to_path_buf();
    assert!(path.join("pedido.json").exists());

    drop(dir);
    assert!(!path.exists());
}
