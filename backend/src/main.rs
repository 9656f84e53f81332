use moon::*;
use shared::{DownMsg, LayoutConfig, UpMsg};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

// ===== CENTRALIZED DEBUG FLAGS =====
const DEBUG_BACKEND: bool = false; // Backend request/response debugging
const DEBUG_CONFIG: bool = true; // Layout config loading and repairs

// Debug macro for easy toggling
macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

const CONFIG_FILE_PATH: &str = ".dragbars.toml";

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Dragbars")
        .index_by_robots(false)
}

async fn up_msg_handler(req: UpMsgRequest<UpMsg>) {
    let (session_id, cor_id) = (req.session_id, req.cor_id);

    debug_log!(DEBUG_BACKEND, "Received request: {:?}", req.up_msg);

    match req.up_msg {
        UpMsg::LoadLayoutConfig => {
            let down_msg = match read_layout_config(Path::new(CONFIG_FILE_PATH)) {
                Ok(config) => DownMsg::LayoutConfigLoaded(config),
                Err(error) => {
                    debug_log!(DEBUG_CONFIG, "{}", error);
                    DownMsg::LayoutConfigError(error)
                }
            };
            send_down_msg(down_msg, session_id, cor_id).await;
        }
    }
}

/// Missing file means defaults. The file is never created or rewritten.
fn read_layout_config(path: &Path) -> Result<LayoutConfig, String> {
    let mut config = match fs::read_to_string(path) {
        Ok(content) => LayoutConfig::from_toml_str(&content)
            .map_err(|error| format!("{}: {}", path.display(), error))?,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug_log!(DEBUG_CONFIG, "{} not found, using default layout", path.display());
            LayoutConfig::default()
        }
        Err(error) => return Err(format!("Failed to read {}: {}", path.display(), error)),
    };

    for warning in config.validate_and_fix() {
        debug_log!(DEBUG_CONFIG, "{}: {}", path.display(), warning);
    }

    Ok(config)
}

async fn send_down_msg(msg: DownMsg, session_id: SessionId, cor_id: CorId) {
    if let Some(session) = sessions::by_session_id().wait_for(session_id).await {
        session.send_down_msg(&msg, cor_id).await;
    } else {
        debug_log!(DEBUG_BACKEND, "Session gone, dropping response");
    }
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_error| {}).await
}
