use serde::{Serialize, Deserialize};

pub mod layout;
pub mod tracks;

pub use layout::{ConfigError, GridAxis, LayoutConfig, PointerEvents, Region};
pub use tracks::{RowMetrics, TrackList, column_tracks, row_tracks};

// ===== MESSAGE TYPES =====

#[derive(Serialize, Deserialize, Debug)]
pub enum UpMsg {
    LoadLayoutConfig,
}

#[derive(Serialize, Deserialize, Debug)]
pub enum DownMsg {
    LayoutConfigLoaded(LayoutConfig),
    LayoutConfigError(String),
}
