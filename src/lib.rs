#![doc(test(attr(deny(warnings))))]

//! Kas Masjid keeps a mosque's monthly cash ledger and renders it as a
//! formatted spreadsheet report with an on-screen preview.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod locale;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Kas Masjid tracing initialized.");
    });
}
