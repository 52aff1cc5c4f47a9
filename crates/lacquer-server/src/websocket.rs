//! WebSocket-based hot reload.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages sent to clients for hot reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HmrMessage {
    /// Full page reload
    Reload,

    /// Update a preview block in place
    UpdatePreview {
        /// Preview block element id
        id: String,
        /// New demo HTML for the stage
        element: String,
        /// New display code for the code panel
        code: String,
    },

    /// Connection established
    Connected,
}

/// Hub for broadcasting hot-reload messages to all connected clients.
#[derive(Debug, Clone)]
pub struct HmrHub {
    sender: broadcast::Sender<HmrMessage>,
}

impl HmrHub {
    /// Create a new hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: HmrMessage) {
        // Ignore send errors (no receivers)
        let _ = self.sender.send(msg);
    }

    /// Subscribe to messages.
    pub fn subscribe(&self) -> broadcast::Receiver<HmrMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for HmrHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the client-side hot-reload script.
///
/// Dev-only; production builds never reference this script.
pub fn hmr_client_script(ws_url: &str) -> String {
    format!(
        r#"
(function() {{
  'use strict';

  const ws = new WebSocket('{}');
  let reconnectAttempts = 0;
  const maxReconnectAttempts = 10;

  ws.onopen = function() {{
    console.log('[HMR] Connected');
    reconnectAttempts = 0;
  }};

  ws.onmessage = function(event) {{
    const msg = JSON.parse(event.data);
    console.log('[HMR]', msg.type);

    switch (msg.type) {{
      case 'reload':
        location.reload();
        break;

      case 'update_preview': {{
        const block = document.getElementById(msg.id);
        if (!block) {{
          location.reload();
          break;
        }}
        const stage = block.querySelector('.preview-stage');
        if (stage) {{
          stage.innerHTML = msg.element;
        }}
        const code = block.querySelector('[data-panel="code"] code');
        if (code) {{
          code.textContent = msg.code;
        }}
        break;
      }}

      case 'connected':
        console.log('[HMR] Server acknowledged connection');
        break;
    }}
  }};

  ws.onclose = function() {{
    console.log('[HMR] Disconnected');
    if (reconnectAttempts < maxReconnectAttempts) {{
      reconnectAttempts++;
      setTimeout(function() {{
        console.log('[HMR] Reconnecting...');
        location.reload();
      }}, 1000 * reconnectAttempts);
    }}
  }};

  ws.onerror = function(e) {{
    console.error('[HMR] WebSocket error:', e);
  }};
}})();
"#,
        ws_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_broadcasts_messages() {
        let hub = HmrHub::new();
        let mut rx = hub.subscribe();

        hub.send(HmrMessage::Reload);

        match rx.try_recv() {
            Ok(HmrMessage::Reload) => {}
            _ => panic!("Expected Reload message"),
        }
    }

    #[test]
    fn serializes_preview_updates() {
        let msg = HmrMessage::UpdatePreview {
            id: "preview-components-button-heartbeatbutton".to_string(),
            element: "<button>Beat</button>".to_string(),
            code: "export default function HeartbeatButton() {}".to_string(),
        };

        let json = serde_json::to_string(&msg).unwrap();

        assert!(json.contains("update_preview"));
        assert!(json.contains("preview-components-button-heartbeatbutton"));
    }

    #[test]
    fn client_script_embeds_ws_url() {
        let script = hmr_client_script("ws://127.0.0.1:7777/__hmr");

        assert!(script.contains("ws://127.0.0.1:7777/__hmr"));
        assert!(script.contains("update_preview"));
    }
}
