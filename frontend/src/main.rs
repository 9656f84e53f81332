//! Dragbars Main Entry Point

use std::cell::RefCell;
use zoon::*;

mod app;
mod config;
mod connection;
mod dragging;
mod layout_host;
mod panel_layout;

thread_local! {
    /// Keeps the connection and message handler alive for the lifetime of the page.
    static APP: RefCell<Option<crate::app::DragbarsApp>> = const { RefCell::new(None) };
}

pub fn main() {
    let app = crate::app::DragbarsApp::new();
    app.request_layout_config();

    let root_element = app.root();
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    start_app("app", move || root_element);
}
