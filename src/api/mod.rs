//! API service modules for e-Boekhouden endpoints.
//!
//! Each service covers one resource. Methods map one-to-one onto a single
//! request; list methods take an optional [`ListQuery`](crate::ListQuery)
//! carrying `limit`, `offset` and filter parameters.

mod administrations;
mod cost_centers;
mod email_templates;
mod invoice_templates;
mod invoices;
mod ledgers;
mod mutations;
mod products;
mod relations;
mod units;

pub use administrations::AdministrationsService;
pub use cost_centers::CostCentersService;
pub use email_templates::EmailTemplatesService;
pub use invoice_templates::InvoiceTemplatesService;
pub use invoices::InvoicesService;
pub use ledgers::LedgersService;
pub use mutations::MutationsService;
pub use products::ProductsService;
pub use relations::RelationsService;
pub use units::UnitsService;
