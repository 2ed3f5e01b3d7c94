// A single product line in a shopping cart.
//
// Carries the requested quantity alongside the stock the shop reported for
// it, so stock checks need nothing beyond the cart itself.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Represents a single item in a cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product name as shown on the receipt
    #[serde(alias = "nombre")]
    pub name: String,

    /// Units requested
    #[serde(alias = "cantidad")]
    pub quantity: u32,

    /// Price per unit
    #[serde(alias = "precio")]
    pub unit_price: Decimal,

    /// Units the shop has on hand
    #[serde(alias = "stockDisponible")]
    pub available_stock: u32,

    /// Needs special packaging
    #[serde(default, alias = "esFragil")]
    pub is_fragile: bool,
}

impl CartItem {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        available_stock: u32,
        is_fragile: bool,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            available_stock,
            is_fragile,
        }
    }

    /// quantity × unit_price, unrounded
    pub fn line_total(&self) -> Result<Decimal> {
        Decimal::from(self.quantity)
            .checked_mul(self.unit_price)
            .ok_or_else(AppError::amount_out_of_range)
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity <= self.available_stock
    }

    /// Shape checks applied at the request boundary
    pub fn validate(&self) -> Result<()> {
        Self::validate_name(&self.name)?;
        Self::validate_quantity(&self.name, self.quantity)?;
        Self::validate_unit_price(&self.name, self.unit_price)?;

        Ok(())
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::invalid_request("Cart item name cannot be empty"));
        }

        Ok(())
    }

    fn validate_quantity(name: &str, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(AppError::invalid_request(format!(
                "Quantity for '{}' must be positive, got: {}",
                name, quantity
            )));
        }

        Ok(())
    }

    fn validate_unit_price(name: &str, unit_price: Decimal) -> Result<()> {
        if unit_price < Decimal::ZERO {
            return Err(AppError::invalid_request(format!(
                "Unit price for '{}' must be non-negative, got: {}",
                name, unit_price
            )));
        }

        Ok(())
    }
}
