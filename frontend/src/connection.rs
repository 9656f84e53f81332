use crate::config::AppConfig;
use futures::stream::StreamExt;
use shared::{DownMsg, UpMsg};
use zoon::*;

/// MoonZoon Connection that forwards every DownMsg into a stream
pub struct ConnectionAdapter {
    connection: Connection<UpMsg, DownMsg>,
}

impl ConnectionAdapter {
    pub fn new() -> (Self, impl futures::stream::Stream<Item = DownMsg>) {
        let (message_sender, message_stream) = futures::channel::mpsc::unbounded();

        let connection = Connection::new(move |down_msg, _| {
            let _ = message_sender.unbounded_send(down_msg);
        });

        let adapter = ConnectionAdapter { connection };
        (adapter, message_stream)
    }

    pub async fn send_up_msg(&self, up_msg: UpMsg) {
        if let Err(error) = self.connection.send_up_msg(up_msg).await {
            zoon::eprintln!("Failed to send message: {:?}", error);
        }
    }
}

/// Connection plus the task that applies incoming messages to the config
pub fn create_connection_message_handler(app_config: &AppConfig) -> (ConnectionAdapter, TaskHandle) {
    let (connection_adapter, mut down_msg_stream) = ConnectionAdapter::new();

    let app_config = app_config.clone();
    let message_handler = Task::start_droppable(async move {
        while let Some(down_msg) = down_msg_stream.next().await {
            handle_down_msg(down_msg, &app_config);
        }
    });

    (connection_adapter, message_handler)
}

fn handle_down_msg(down_msg: DownMsg, app_config: &AppConfig) {
    match down_msg {
        DownMsg::LayoutConfigLoaded(layout) => {
            app_config.layout.set_neq(layout);
            app_config.load_error.set_neq(None);
        }
        DownMsg::LayoutConfigError(error) => {
            zoon::eprintln!("Layout config unavailable, keeping defaults: {}", error);
            app_config.load_error.set_neq(Some(error));
        }
    }
}
