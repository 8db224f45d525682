//! Page behaviours run once the page is ready.
pub mod dom;
pub mod names;
pub mod toggle;

use crate::config::PageConfig;
use dom::PageRoot;
use log::info;
use names::format_scientific_names;
use toggle::SensitiveInfoToggle;

/// What `initialize` did to a page.
#[derive(Debug)]
pub struct PageSetup {
    pub names_formatted: usize,
    /// `None` when the page has no toggle control.
    pub toggle: Option<SensitiveInfoToggle>,
}

/// Page-ready entry point: formats scientific names and attaches the
/// sensitive-info toggle. Call once per loaded page.
pub fn initialize<R: PageRoot>(root: &mut R, config: &PageConfig) -> PageSetup {
    info!("Page ready");
    let names_formatted = format_scientific_names(root, config);
    let toggle = SensitiveInfoToggle::attach(root, config);
    PageSetup {
        names_formatted,
        toggle,
    }
}
