use crate::core::{AppError, Result};
use crate::modules::invoices::models::CartItem;

/// Checks requested quantities against available stock
pub struct StockValidator;

impl StockValidator {
    /// True when every item can be fulfilled
    pub fn has_sufficient_stock(items: &[CartItem]) -> bool {
        items.iter().all(CartItem::is_in_stock)
    }

    /// First item, in cart order, asking for more than is on hand
    pub fn find_shortage(items: &[CartItem]) -> Option<&CartItem> {
        items.iter().find(|item| !item.is_in_stock())
    }

    pub fn ensure_in_stock(items: &[CartItem]) -> Result<()> {
        match Self::find_shortage(items) {
            Some(item) => Err(AppError::stock_shortage(
                item.name.clone(),
                item.quantity,
                item.available_stock,
            )),
            None => Ok(()),
        }
    }
}
