//! Resizable page: a 3-column by 5-row grid with two divider bars
//!
//! ```text
//!            col 1   col 2   col 3
//!  row 1   | header                  |
//!  row 2   | side  |  bar  | overview|
//!  row 3   | side  |  bar  |  ====   |
//!  row 4   | side  |  bar  | details |
//!  row 5   | footer                  |
//! ```

use crate::config::AppConfig;
use crate::dragging::DragController;
use crate::layout_host::{DomLayoutHost, LayoutError};
use shared::{GridAxis, Region};
use zoon::events::{MouseDown, MouseMove, MouseUp};
use zoon::*;

const DIVIDER_COLOR: &str = "oklch(70% 0.09 255 / 0.45)";
const DIVIDER_ACTIVE_COLOR: &str = "oklch(62% 0.16 255)";
const PANE_BACKGROUND: &str = "oklch(97% 0.005 255)";

pub type PageDragController = DragController<DomLayoutHost>;

pub fn log_layout_error(result: Result<(), LayoutError>) {
    if let Err(error) = result {
        zoon::eprintln!("Panel drag failed: {}", error);
    }
}

pub fn page_layout(app_config: &AppConfig, controller: &PageDragController) -> impl Element + use<> {
    let cursor_signal = controller.drag_state_signal().map(|state| {
        if state.is_horizontal() {
            Some("col-resize")
        } else if state.is_vertical() {
            Some("row-resize")
        } else {
            None
        }
    });
    let column_template_signal = app_config.column_template_signal();
    let row_template_signal = app_config.row_template_signal();

    Column::new()
        .s(Width::fill())
        .s(Height::screen())
        .update_raw_el({
            let controller = controller.clone();
            move |raw_el| {
                raw_el
                    .attr("id", Region::Container.id())
                    .style("display", "grid")
                    .style("overflow", "hidden")
                    .style_signal("cursor", cursor_signal)
                    .style_signal("grid-template-columns", column_template_signal)
                    .style_signal("grid-template-rows", row_template_signal)
                    // Moves and releases anywhere on the page, so a drag keeps
                    // following the pointer after it leaves the divider bar.
                    .global_event_handler({
                        let controller = controller.clone();
                        move |event: MouseMove| log_layout_error(controller.on_drag(&event))
                    })
                    .global_event_handler(move |event: MouseUp| {
                        log_layout_error(controller.end_drag(&event))
                    })
            }
        })
        .item(header(app_config))
        .item(side_panel())
        .item(columns_divider(controller.clone()))
        .item(content_pane(Region::Overview, "2", "Overview"))
        .item(rows_divider(controller.clone()))
        .item(content_pane(Region::Details, "4", "Details"))
        .item(footer(app_config))
}

fn header(app_config: &AppConfig) -> impl Element + use<> {
    let margin_signal = app_config.header_margin_signal();
    El::new()
        .s(Padding::new().x(12).y(8))
        .s(Font::new().weight(FontWeight::SemiBold))
        .update_raw_el(move |raw_el| {
            raw_el
                .attr("id", Region::Header.id())
                .style("grid-column", "1 / 4")
                .style("grid-row", "1")
                .style("margin", "0")
                .style_signal("margin-bottom", margin_signal)
        })
        .child("Dragbars")
}

fn side_panel() -> impl Element {
    El::new()
        .s(Background::new().color(PANE_BACKGROUND))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("id", Region::Side.id())
                .style("grid-column", "1")
                .style("grid-row", "2 / 5")
                .style("overflow", "auto")
                .style("min-width", "0")
        })
        .child("Side")
}

fn content_pane(region: Region, grid_row: &'static str, title: &'static str) -> impl Element {
    El::new()
        .s(Background::new().color(PANE_BACKGROUND))
        .update_raw_el(move |raw_el| {
            raw_el
                .attr("id", region.id())
                .style("grid-column", "3")
                .style("grid-row", grid_row)
                .style("overflow", "auto")
                .style("min-width", "0")
                .style("min-height", "0")
        })
        .child(title)
}

fn footer(app_config: &AppConfig) -> impl Element + use<> {
    let margin_signal = app_config.footer_margin_signal();
    El::new()
        .s(Padding::new().x(12).y(4))
        .s(Font::new().size(12))
        .update_raw_el(move |raw_el| {
            raw_el
                .attr("id", Region::Footer.id())
                .style("grid-column", "1 / 4")
                .style("grid-row", "5")
                .style("margin", "0")
                .style_signal("margin-top", margin_signal)
        })
        .child_signal(app_config.load_error.signal_cloned().map(|error| {
            error.map(|error| Text::new(format!("Default layout in use: {}", error)))
        }))
}

/// Vertical bar between the side column and the content column
fn columns_divider(controller: PageDragController) -> impl Element {
    divider_bar(
        controller,
        GridAxis::Columns,
        ("2", "2 / 5"),
        CursorIcon::ColumnResize,
        |controller, event| controller.start_horizontal_drag(event),
    )
}

/// Horizontal bar between overview and details
fn rows_divider(controller: PageDragController) -> impl Element {
    divider_bar(
        controller,
        GridAxis::Rows,
        ("3", "3"),
        CursorIcon::RowResize,
        |controller, event| controller.start_vertical_drag(event),
    )
}

fn divider_bar(
    controller: PageDragController,
    axis: GridAxis,
    (grid_column, grid_row): (&'static str, &'static str),
    cursor: CursorIcon,
    start_drag: fn(&PageDragController, &MouseDown) -> Result<(), LayoutError>,
) -> impl Element {
    let is_dragging_signal = controller.is_axis_dragging_signal(axis);

    El::new()
        .s(Cursor::new(cursor))
        .s(Background::new()
            .color_signal(is_dragging_signal.map_bool(|| DIVIDER_ACTIVE_COLOR, || DIVIDER_COLOR)))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("grid-column", grid_column)
                .style("grid-row", grid_row)
                .style("user-select", "none")
                .event_handler(move |event: MouseDown| {
                    if event.button() != events::MouseButton::Left {
                        return;
                    }
                    log_layout_error(start_drag(&controller, &event));
                })
        })
}
