//! Grid track geometry for the two resizable axes.
//!
//! Nothing here is clamped: a pointer outside the container produces negative
//! or degenerate tracks and the page renders whatever the browser makes of them.

use crate::layout::LayoutConfig;
use std::fmt;

/// Pixel sizes of a grid's columns or rows, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackList(Vec<i32>);

impl TrackList {
    pub fn new(tracks: Vec<i32>) -> Self {
        Self(tracks)
    }

    pub fn tracks(&self) -> &[i32] {
        &self.0
    }
}

impl fmt::Display for TrackList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, track) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}px", track)?;
        }
        Ok(())
    }
}

/// Side column, divider, main column.
pub fn column_tracks(pointer_x: i32, container_width: i32, config: &LayoutConfig) -> TrackList {
    let side_width = pointer_x;
    let main_width = container_width - side_width - config.divider_width;
    TrackList::new(vec![side_width, config.divider_width, main_width])
}

/// Live measurements needed to lay out the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMetrics {
    pub pointer_y: i32,
    pub container_height: i32,
    /// Rendered header height, margins excluded
    pub header_height: i32,
    pub footer_height: i32,
}

/// Header, overview, divider, details, footer.
pub fn row_tracks(metrics: RowMetrics, config: &LayoutConfig) -> TrackList {
    let header = metrics.header_height + config.header_margin;
    let footer = metrics.footer_height + config.footer_margin;
    let overview = metrics.pointer_y - header;
    let details = metrics.container_height - header - footer - overview - config.divider_width;
    TrackList::new(vec![header, overview, config.divider_width, details, footer])
}
