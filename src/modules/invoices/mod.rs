// Invoices module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CartItem, Customer, InvoiceBreakdown, RenderedInvoice};
pub use services::{InvoiceCalculator, InvoiceService};
