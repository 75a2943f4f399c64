//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the Concierge library and the
//! Zellij plugin system. It translates Zellij events and pipe messages into
//! library events and executes the resulting actions through the host API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`, request
//!    permissions, install the global key listener, watch pane updates
//! 2. **Update / Pipe**: Map keys, pointer presses and pipe messages to
//!    library events
//! 3. **Render**: Report the pane size (the first call mounts the render
//!    root), then print the composited frame
//!
//! # Event Mapping
//!
//! - `Key(Ctrl+i | Super+i)` → `Event::Shortcut`
//! - `Key(Esc)` → `Event::Escape`
//! - `Key(char | Backspace)` → `Event::Char` / `Event::Backspace`
//! - `Mouse(LeftClick(line, col))` → `Event::Click` (1-indexed)
//! - pipe `concierge` with payload `open | close | toggle`
//! - `PaneUpdate` → `Event::HostFullscreen` for the plugin's own pane
//!
//! Surface actions always target the plugin's own pane by id, never the
//! pane that happens to hold focus.
//!
//! Zellij delivers keys only to the focused pane. To open the overlay from
//! anywhere, bind a key to a pipe message:
//!
//! ```kdl
//! keybinds {
//!     shared { bind "Ctrl i" { MessagePlugin "concierge" { payload "open"; }; }; }
//! }
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use concierge::app::input::{is_own_pipe, map_key, map_pipe};
use concierge::infrastructure::{EventSource, KeyListener, ListenedEvent};
use concierge::{handle_event, Action, Config, Event as AppEvent};

register_plugin!(State);

/// Subscribes and unsubscribes through the Zellij shim.
#[derive(Debug, Default)]
struct ZellijHost;

impl ZellijHost {
    fn event_types(events: &[ListenedEvent]) -> Vec<EventType> {
        events
            .iter()
            .map(|event| match event {
                ListenedEvent::Key => EventType::Key,
                ListenedEvent::Mouse => EventType::Mouse,
            })
            .collect()
    }
}

impl EventSource for ZellijHost {
    fn subscribe(&mut self, events: &[ListenedEvent]) {
        subscribe(&Self::event_types(events));
    }

    fn unsubscribe(&mut self, events: &[ListenedEvent]) {
        unsubscribe(&Self::event_types(events));
    }
}

/// Plugin state wrapper.
struct State {
    /// Core application state from the library layer.
    app: concierge::AppState,

    /// Global key listener, held for the lifetime of the plugin.
    listener: Option<KeyListener<ZellijHost>>,

    /// Id of this plugin's pane, known after load.
    plugin_id: u32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: concierge::initialize(&Config::default()),
            listener: None,
            plugin_id: 0,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Requests `ChangeApplicationState`, needed to rename, focus and
    /// fullscreen the pane, and `ReadApplicationState` for pane updates.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        concierge::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();

        self.app = concierge::initialize(&config);
        tracing::debug!(label = %self.app.props.label, raise_on_open = config.raise_on_open, "app state initialized");

        self.plugin_id = get_plugin_ids().plugin_id;

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[EventType::PermissionRequestResult, EventType::PaneUpdate]);

        self.listener = Some(KeyListener::install(ZellijHost));

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the pane should re-render.
    fn update(&mut self, event: Event) -> bool {
        let _span = tracing::debug_span!("plugin_update").entered();

        let app_event = match event {
            Event::Key(ref key) => map_key(key),
            Event::Mouse(Mouse::LeftClick(line, col)) => Self::map_click(line, col),
            Event::PaneUpdate(ref manifest) => self.own_fullscreen(manifest),
            Event::PermissionRequestResult(status) => {
                self.handle_permission_result(status);
                None
            }
            _ => None,
        };

        app_event.map_or(false, |event| self.dispatch(&event))
    }

    /// Handles pipe messages (`open`, `close`, `toggle`).
    ///
    /// A CLI pipe addressed to the plugin blocks the `zellij pipe` command
    /// until released, so it is released once handled.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        tracing::debug!(name = %pipe_message.name, payload = ?pipe_message.payload, "pipe message");

        let should_render = map_pipe(&pipe_message.name, pipe_message.payload.as_deref())
            .map_or(false, |event| self.dispatch(&event));

        if matches!(pipe_message.source, PipeSource::Cli(_)) && is_own_pipe(&pipe_message.name) {
            unblock_cli_pipe_input(&pipe_message.name);
        }

        should_render
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        self.dispatch(&AppEvent::Viewport { rows, cols });

        match concierge::ui::render(&self.app, rows, cols) {
            Ok(frame) => print!("{frame}"),
            Err(e) => tracing::debug!(error = %e, "frame skipped"),
        }
    }
}

impl State {
    /// Converts a 0-indexed pointer position to 1-indexed cell coordinates.
    fn map_click(line: isize, col: usize) -> Option<AppEvent> {
        let row = usize::try_from(line).ok()?;
        Some(AppEvent::Click {
            row: row + 1,
            col: col + 1,
        })
    }

    /// Extracts the fullscreen flag of this plugin's pane from a manifest.
    fn own_fullscreen(&self, manifest: &PaneManifest) -> Option<AppEvent> {
        manifest
            .panes
            .values()
            .flatten()
            .find(|pane| pane.is_plugin && pane.id == self.plugin_id)
            .map(|pane| AppEvent::HostFullscreen(pane.is_fullscreen))
    }

    /// Runs an event through the library and executes its actions.
    fn dispatch(&mut self, event: &AppEvent) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, ?event, "event dropped");
                false
            }
        }
    }

    fn handle_permission_result(&self, status: PermissionStatus) {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                rename_plugin_pane(self.plugin_id, &self.app.props.label);
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - overlay will not raise the pane");
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self), fields(plugin_id = self.plugin_id))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::FocusSurface => focus_plugin_pane(self.plugin_id, false),
            Action::RaiseSurface => {
                focus_plugin_pane(self.plugin_id, false);
                toggle_pane_id_fullscreen(PaneId::Plugin(self.plugin_id));
            }
            Action::LowerSurface => toggle_pane_id_fullscreen(PaneId::Plugin(self.plugin_id)),
        }
    }
}
