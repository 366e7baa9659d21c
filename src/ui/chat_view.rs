use crate::router::{ROOT_ROUTE, Router};
use crate::session::SessionProvider;

use super::components::{chat_area, header, input_bar};
use super::state::{ChatState, USER_MESSAGE_FIELD};

/// The chat page: header, message list and input row.
pub struct ChatView {
    state: ChatState,
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            state: ChatState::new(),
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        session: &mut dyn SessionProvider,
        router: &mut dyn Router,
    ) {
        let header_actions = egui::TopBottomPanel::top("chat_header")
            .show(ctx, |ui| header::render(ui, session.user()))
            .inner;

        let input_actions = egui::TopBottomPanel::bottom("chat_input")
            .show(ctx, |ui| {
                input_bar::render(
                    ui,
                    &mut self.state.draft,
                    self.state.errors.error_for(USER_MESSAGE_FIELD),
                )
            })
            .inner;

        egui::CentralPanel::default().show(ctx, |ui| {
            chat_area::render(ui, &self.state.messages, session.user());
        });

        if input_actions.changed {
            self.state.clear_draft_error();
        }
        if input_actions.submit {
            self.state.submit_draft(session.user());
        }
        if header_actions.logout {
            logout(session, router);
        }
    }
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

pub fn logout(session: &mut dyn SessionProvider, router: &mut dyn Router) {
    session.clear_user();
    router.push(ROOT_ROUTE);
}
