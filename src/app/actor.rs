//! App actor - message loop processing UI events and store updates

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, StoreCommand, StoreUpdate, UiEvent};
use crate::theme::ThemeProvider;

/// App actor that processes UI events and store updates
pub struct AppActor {
    state: AppState,
    theme: ThemeProvider,
    store_tx: mpsc::UnboundedSender<StoreCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        theme: ThemeProvider,
        store_tx: mpsc::UnboundedSender<StoreCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        let state = AppState::new(theme.current());
        AppActor {
            state,
            theme,
            store_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut store_rx: mpsc::UnboundedReceiver<StoreUpdate>,
    ) {
        let mut theme_rx = self.theme.subscribe();

        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.store_tx.send(StoreCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(update) = store_rx.recv() => {
                    self.state.handle_store_update(update);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Ok(()) = theme_rx.changed() => {
                    self.state.theme = *theme_rx.borrow_and_update();
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectNext => self.state.select_next(),

            UiEvent::ToggleFavorite => {
                if let Some(cmd) = self.state.toggle_selected() {
                    let _ = self.store_tx.send(cmd);
                }
            }

            UiEvent::ToggleTheme => {
                // The provider owns the value; the changed() arm in run()
                // folds the new theme back into state.
                self.theme.toggle();
            }

            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            UiEvent::Quit => return true,
        }

        false
    }
}
