use shared::LayoutConfig;
use zoon::*;

/// Layout configuration as delivered by the backend.
///
/// Starts with defaults so the page renders before the first DownMsg arrives.
#[derive(Clone)]
pub struct AppConfig {
    pub layout: Mutable<LayoutConfig>,
    /// Last config loading failure, shown in the footer
    pub load_error: Mutable<Option<String>>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            layout: Mutable::new(LayoutConfig::default()),
            load_error: Mutable::new(None),
        }
    }

    pub fn column_template_signal(&self) -> impl Signal<Item = String> + use<> {
        self.layout.signal_ref(|layout| layout.initial_column_template())
    }

    pub fn row_template_signal(&self) -> impl Signal<Item = String> + use<> {
        self.layout.signal_ref(|layout| layout.initial_row_template())
    }

    pub fn header_margin_signal(&self) -> impl Signal<Item = String> + use<> {
        self.layout.signal_ref(|layout| format!("{}px", layout.header_margin))
    }

    pub fn footer_margin_signal(&self) -> impl Signal<Item = String> + use<> {
        self.layout.signal_ref(|layout| format!("{}px", layout.footer_margin))
    }
}
