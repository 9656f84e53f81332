use serde::{Deserialize, Serialize};
use std::fmt;

// ===== PAGE REGIONS =====

/// Named regions of the resizable page, addressed by their DOM id.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Container,
    Header,
    Side,
    Overview,
    Details,
    Footer,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Container,
        Region::Header,
        Region::Side,
        Region::Overview,
        Region::Details,
        Region::Footer,
    ];

    /// Content panes that must not swallow pointer input while a divider is dragged.
    pub const CONTENT_PANES: [Region; 2] = [Region::Overview, Region::Details];

    pub fn id(self) -> &'static str {
        match self {
            Region::Container => "container",
            Region::Header => "header",
            Region::Side => "side",
            Region::Overview => "overview",
            Region::Details => "details",
            Region::Footer => "footer",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    Columns,
    Rows,
}

impl GridAxis {
    pub fn css_property(self) -> &'static str {
        match self {
            GridAxis::Columns => "grid-template-columns",
            GridAxis::Rows => "grid-template-rows",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
    None,
    Auto,
}

impl PointerEvents {
    pub const CSS_PROPERTY: &'static str = "pointer-events";

    pub fn as_css(self) -> &'static str {
        match self {
            PointerEvents::None => "none",
            PointerEvents::Auto => "auto",
        }
    }
}

// ===== CONFIG TYPES =====

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse layout config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Geometry constants of the page. Read once at start-up, never written back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of both divider bars in pixels
    pub divider_width: i32,
    /// Vertical space around the header that its rendered height doesn't include
    pub header_margin: i32,
    pub footer_margin: i32,
    // Initial `fr` proportions, used until the first drag replaces them with pixels
    pub side_fraction: u32,
    pub main_fraction: u32,
    pub overview_fraction: u32,
    pub details_fraction: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            divider_width: Self::DEFAULT_DIVIDER_WIDTH,
            header_margin: Self::DEFAULT_MARGIN,
            footer_margin: Self::DEFAULT_MARGIN,
            side_fraction: 1,
            main_fraction: 3,
            overview_fraction: 1,
            details_fraction: 1,
        }
    }
}

impl LayoutConfig {
    pub const DEFAULT_DIVIDER_WIDTH: i32 = 2;
    pub const DEFAULT_MARGIN: i32 = 10;

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Repair values the page can't render, returning a warning per fix.
    pub fn validate_and_fix(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.divider_width < 0 {
            warnings.push(format!(
                "divider_width {} is negative, using {}",
                self.divider_width,
                Self::DEFAULT_DIVIDER_WIDTH
            ));
            self.divider_width = Self::DEFAULT_DIVIDER_WIDTH;
        }

        for (name, margin) in [
            ("header_margin", &mut self.header_margin),
            ("footer_margin", &mut self.footer_margin),
        ] {
            if *margin < 0 {
                warnings.push(format!(
                    "{} {} is negative, using {}",
                    name,
                    margin,
                    Self::DEFAULT_MARGIN
                ));
                *margin = Self::DEFAULT_MARGIN;
            }
        }

        for (name, fraction) in [
            ("side_fraction", &mut self.side_fraction),
            ("main_fraction", &mut self.main_fraction),
            ("overview_fraction", &mut self.overview_fraction),
            ("details_fraction", &mut self.details_fraction),
        ] {
            if *fraction == 0 {
                warnings.push(format!("{} must be at least 1", name));
                *fraction = 1;
            }
        }

        warnings
    }

    pub fn initial_column_template(&self) -> String {
        format!(
            "{}fr {}px {}fr",
            self.side_fraction, self.divider_width, self.main_fraction
        )
    }

    /// Header and footer size to their content, the two content rows share the rest.
    pub fn initial_row_template(&self) -> String {
        format!(
            "auto {}fr {}px {}fr auto",
            self.overview_fraction, self.divider_width, self.details_fraction
        )
    }
}
