use std::sync::Arc;

use codesnip_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;
use crate::ui::{display_loop, overlay_loop};

/// Centralized channel management
pub struct ChannelSet {
    /// Overlay session / toolkit adapter -> backend
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    /// Backend -> presentation layer
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    /// Backend -> overlay session (activation + forwarded pointer input)
    pub overlay: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            ui_to_app: kanal::bounded_async(64),  // UI interactions
            app_to_ui: kanal::bounded_async(64),  // outcomes + status
            overlay: kanal::bounded_async(256),   // pointer-move burst capacity
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Backend event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.channels.overlay.0.clone(),
        ));

        // Overlay gesture session
        tasks.spawn(overlay_loop(
            self.channels.overlay.1.clone(),
            self.channels.ui_to_app.0.clone(),
        ));

        // Presentation consumer
        tasks.spawn(display_loop(self.channels.app_to_ui.1.clone()));

        // Hotkey watcher
        tasks.spawn(watcher_io(
            self.state.clone(),
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
