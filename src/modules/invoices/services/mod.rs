pub mod invoice_calculator;
pub mod invoice_loader;
pub mod invoice_renderer;
pub mod invoice_service;
pub mod stock_validator;

pub use invoice_calculator::InvoiceCalculator;
pub use invoice_loader::InvoiceLoader;
pub use invoice_renderer::InvoiceRenderer;
pub use invoice_service::InvoiceService;
pub use stock_validator::StockValidator;
