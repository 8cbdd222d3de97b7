//! Edge layer of the bilingual (English/Spanish) realtor site.
//!
//! - [`i18n`]: locale resolution, slug translation and UI labels
//! - [`leads`]: lead capture records and storage
//! - [`server`]: axum router with the root-path language redirect
//! - [`config`]: environment configuration
//! - [`security`]: admin API key checks

pub mod config;
pub mod i18n;
pub mod leads;
pub mod security;
pub mod server;
