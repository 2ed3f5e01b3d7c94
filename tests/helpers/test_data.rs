// Test Data Factory
//
// Builds request payloads and scratch directories. Directory names carry a
// UUID so concurrent test binaries never share files.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::{json, Value};
use uuid::Uuid;

/// Date every test clock is pinned to; delivery lands on 04/01/2025
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid test date")
}

pub struct TestDataFactory;

impl TestDataFactory {
    pub fn customer() -> Value {
        json!({"name": "ana", "email": "a@b.com"})
    }

    pub fn item(name: &str, quantity: u32, unit_price: Value, stock: u32, fragile: bool) -> Value {
        json!({
            "name": name,
            "quantity": quantity,
            "unitPrice": unit_price,
            "availableStock": stock,
            "isFragile": fragile
        })
    }

    /// One fragile item: 2 × 60 = 120, discounted to 114
    pub fn discounted_payload() -> Value {
        json!({
            "customer": Self::customer(),
            "cart": [Self::item("Maceta", 2, json!(60), 10, true)]
        })
    }

    /// 5 requested, 2 on hand
    pub fn short_stock_payload() -> Value {
        json!({
            "customer": Self::customer(),
            "cart": [Self::item("Lápiz", 5, json!(1), 2, false)]
        })
    }

    pub fn empty_cart_payload() -> Value {
        json!({"customer": Self::customer(), "cart": []})
    }

    /// Same cart as [`Self::discounted_payload`] with the legacy Spanish keys
    pub fn legacy_payload() -> Value {
        json!({
            "cliente": {"nombre": "ana", "email": "a@b.com"},
            "carrito": [{
                "nombre": "Maceta",
                "cantidad": 2,
                "precio": 60,
                "stockDisponible": 10,
                "esFragil": true
            }]
        })
    }
}

/// Temp directory removed with everything in it on drop
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Fresh directory under the OS temp dir
pub fn scratch_dir() -> ScratchDir {
    let path = std::env::temp_dir().join(format!("eco-invoice-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&path).expect("create scratch dir");
    ScratchDir { path }
}

pub fn write_json(dir: &Path, stem: &str, value: &Value) {
    let path = dir.join(format!("{}.json", stem));
    std::fs::write(path, serde_json::to_vec_pretty(value).expect("serialize"))
        .expect("write fixture");
}
