pub const DRAFT_PLACEHOLDER: &str = "Type our message here...";

const SEND_BUTTON_SIZE: [f32; 2] = [72.0, 40.0];

#[derive(Default)]
pub struct InputActions {
    pub submit: bool,
    pub changed: bool,
}

/// Stable id of the draft text field, independent of the enclosing panel.
pub fn draft_id() -> egui::Id {
    egui::Id::new("chat_draft_input")
}

pub fn render(ui: &mut egui::Ui, draft: &mut String, error: Option<&str>) -> InputActions {
    let mut actions = InputActions::default();
    let draft_id = draft_id();

    // Enter submits; it has to be consumed before the text edit inserts a newline.
    if ui.memory(|memory| memory.has_focus(draft_id))
        && ui.input_mut(|input| input.consume_key(egui::Modifiers::NONE, egui::Key::Enter))
    {
        actions.submit = true;
    }

    ui.horizontal(|ui| {
        let width = ui.available_width() - SEND_BUTTON_SIZE[0] - ui.spacing().item_spacing.x;
        let response = ui.add(
            egui::TextEdit::multiline(draft)
                .id(draft_id)
                .hint_text(DRAFT_PLACEHOLDER)
                .desired_rows(2)
                .desired_width(width),
        );
        if response.changed() {
            actions.changed = true;
        }

        if ui
            .add_sized(SEND_BUTTON_SIZE, egui::Button::new("Send"))
            .clicked()
        {
            actions.submit = true;
        }
    });

    if let Some(message) = error {
        ui.colored_label(egui::Color32::RED, message);
    }

    actions
}
