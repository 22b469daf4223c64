pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod section;

pub use catalog::{BillingPeriod, Catalog, CatalogResponse, ConversionNote, FreeTrial, Plan};
pub use client::CatalogClient;
pub use config::Config;
pub use error::PricingError;
pub use render::{pricing_card, pricing_note};
pub use section::{load_pricing_plans, PricingSection};
