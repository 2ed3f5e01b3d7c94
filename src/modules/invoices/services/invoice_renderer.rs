// Receipt text for a computed invoice.
//
// The layout is consumed verbatim by existing clients (printed tickets and
// the shop front end), so labels, banners and line order must not drift.

use crate::core::clock::format_day_month_year;
use crate::core::money::{format_amount, format_percentage};
use crate::modules::invoices::models::{CartItem, Customer, InvoiceBreakdown};
use crate::modules::pricing::PricingPolicy;

const BANNER: &str = "=========================================";
const RULE: &str = "-----------------------------------------";
const ITEM_BULLET: &str = "  - ";
const FREE_SHIPPING: &str = "GRATIS";
const FRAGILE_YES: &str = "SÍ (Precaución: Frágil)";
const FRAGILE_NO: &str = "No";

/// Renders the fixed-layout receipt
pub struct InvoiceRenderer;

impl InvoiceRenderer {
    pub fn render(
        customer: &Customer,
        items: &[CartItem],
        breakdown: &InvoiceBreakdown,
        policy: &PricingPolicy,
    ) -> String {
        let shipping = if breakdown.has_free_shipping() {
            FREE_SHIPPING.to_string()
        } else {
            format!("+{}", format_amount(breakdown.shipping_cost))
        };
        let fragile = if breakdown.fragile_packaging {
            FRAGILE_YES
        } else {
            FRAGILE_NO
        };

        let lines = [
            BANNER.to_string(),
            "🌱 TIENDA ECO - FACTURA OFICIAL 🌱".to_string(),
            BANNER.to_string(),
            format!("👤 Cliente: {}", customer.name.to_uppercase()),
            format!("📧 Contacto: {}", customer.email),
            String::new(),
            "📦 Productos:".to_string(),
            format!("{}{}", ITEM_BULLET, Self::product_list(items)),
            format!("⚠️ Embalaje especial: {}", fragile),
            String::new(),
            "--- Desglose ---".to_string(),
            format!("Subtotal: {}", format_amount(breakdown.subtotal)),
            format!("Descuento: -{}", format_amount(breakdown.discount)),
            format!("Base Imponible: {}", format_amount(breakdown.taxed_base)),
            format!(
                "IVA ({}): +{}",
                format_percentage(policy.tax_rate),
                format_amount(breakdown.tax_amount)
            ),
            format!("Envío: {}", shipping),
            RULE.to_string(),
            format!("💶 TOTAL A PAGAR: {}", format_amount(breakdown.total)),
            BANNER.to_string(),
            format!(
                "🚚 Entrega estimada: {}",
                format_day_month_year(breakdown.estimated_delivery)
            ),
            BANNER.to_string(),
        ];

        lines.join("\n")
    }

    /// "2x Maceta" entries joined so each lands on its own bulleted line
    fn product_list(items: &[CartItem]) -> String {
        items
            .iter()
            .map(|item| format!("{}x {}", item.quantity, item.name))
            .collect::<Vec<_>>()
            .join(&format!("\n{}", ITEM_BULLET))
    }
}
