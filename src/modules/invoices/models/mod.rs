mod cart_item;
mod customer;
mod invoice;

pub use cart_item::CartItem;
pub use customer::Customer;
pub use invoice::{CreateInvoiceRequest, InvoiceBreakdown, InvoiceResponse, RenderedInvoice};
