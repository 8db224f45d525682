//! Show/hide control for sensitive-information rows.
//!
//! `SensitiveToggle` is the two-state machine on its own. `SensitiveInfoToggle`
//! binds it to a control on a page and applies each transition to the page:
//! row display, control label and control style move together.
use crate::config::PageConfig;
use crate::page::dom::{ElementRef, PageRoot};
use log::{debug, info};

const HIDDEN_DISPLAY: &str = "none";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleState {
    #[default]
    Hidden,
    Visible,
}

impl ToggleState {
    pub fn flipped(self) -> Self {
        match self {
            ToggleState::Hidden => ToggleState::Visible,
            ToggleState::Visible => ToggleState::Hidden,
        }
    }
}

/// Tracks whether sensitive rows are shown. Starts hidden.
#[derive(Debug, Default)]
pub struct SensitiveToggle {
    state: ToggleState,
}

impl SensitiveToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> ToggleState {
        self.state = self.state.flipped();
        self.state
    }
}

/// A `SensitiveToggle` attached to the page's toggle control.
#[derive(Debug)]
pub struct SensitiveInfoToggle {
    control: ElementRef,
    toggle: SensitiveToggle,
    config: PageConfig,
}

impl SensitiveInfoToggle {
    /// Binds to the configured control. Returns `None` when the page has no
    /// such control, which only means the page has nothing to toggle.
    pub fn attach<R: PageRoot>(root: &R, config: &PageConfig) -> Option<Self> {
        let control = root.element_by_id(&config.toggle_control_id);
        debug!(
            "Toggle control '{}' found: {}",
            config.toggle_control_id,
            control.is_some()
        );
        let Some(control) = control else {
            info!(
                "No '{}' control on page; sensitive-info toggle not attached",
                config.toggle_control_id
            );
            return None;
        };
        Some(Self {
            control,
            toggle: SensitiveToggle::new(),
            config: config.clone(),
        })
    }

    pub fn state(&self) -> ToggleState {
        self.toggle.state()
    }

    /// Handles one click on the control.
    ///
    /// The transition depends only on the tracked state; the current display of
    /// the rows is never consulted. Rows are looked up on every click.
    pub fn click<R: PageRoot>(&mut self, root: &mut R) -> ToggleState {
        let rows = root.query_class(&self.config.sensitive_class);
        debug!("Toggle clicked; {} sensitive element(s)", rows.len());

        let state = self.toggle.toggle();
        let cfg = &self.config;
        let (display, label, remove, add) = match state {
            ToggleState::Visible => (
                cfg.row_display.as_str(),
                &cfg.hide_label,
                &cfg.outline_class,
                &cfg.danger_class,
            ),
            ToggleState::Hidden => (
                HIDDEN_DISPLAY,
                &cfg.show_label,
                &cfg.danger_class,
                &cfg.outline_class,
            ),
        };
        for row in rows {
            root.set_display(row, display);
        }
        root.set_text_content(self.control, label.clone());
        root.remove_class(self.control, remove);
        root.add_class(self.control, add);
        state
    }

    /// Whether every sensitive row currently shows the tracked state.
    ///
    /// Other code may change row display behind the toggle's back; this only
    /// reports the drift and leaves the tracked state alone. Rows never touched
    /// count as hidden.
    pub fn is_in_sync<R: PageRoot>(&self, root: &R) -> bool {
        let expected = match self.state() {
            ToggleState::Visible => self.config.row_display.as_str(),
            ToggleState::Hidden => HIDDEN_DISPLAY,
        };
        root.query_class(&self.config.sensitive_class)
            .into_iter()
            .all(|row| {
                root.display(row)
                    .as_deref()
                    .unwrap_or(HIDDEN_DISPLAY)
                    == expected
            })
    }
}
