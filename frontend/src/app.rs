//! DragbarsApp - owns the page view and everything its event handlers share

use crate::config::AppConfig;
use crate::connection::{ConnectionAdapter, create_connection_message_handler};
use crate::dragging::DragController;
use crate::layout_host::DomLayoutHost;
use crate::panel_layout::{PageDragController, page_layout};
use shared::UpMsg;
use std::sync::Arc;
use zoon::*;

pub struct DragbarsApp {
    /// Layout configuration delivered by the backend
    pub config: AppConfig,

    /// Drag state of this page view, cloned into every mouse handler
    pub drag_controller: PageDragController,

    pub connection: Arc<ConnectionAdapter>,

    _message_handler: TaskHandle,
}

impl DragbarsApp {
    pub fn new() -> Self {
        let config = AppConfig::new();
        let drag_controller = DragController::new(DomLayoutHost, config.layout.clone());
        let (connection, message_handler) = create_connection_message_handler(&config);

        Self {
            config,
            drag_controller,
            connection: Arc::new(connection),
            _message_handler: message_handler,
        }
    }

    pub fn root(&self) -> impl Element + use<> {
        page_layout(&self.config, &self.drag_controller)
    }

    pub fn request_layout_config(&self) {
        let connection = self.connection.clone();
        Task::start(async move {
            connection.send_up_msg(UpMsg::LoadLayoutConfig).await;
        });
    }
}
