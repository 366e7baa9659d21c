/// Returns the trimmed name once the user confirms a non-empty one.
pub fn render(ui: &mut egui::Ui, name_input: &mut String) -> Option<String> {
    let mut confirm = false;

    ui.vertical_centered(|ui| {
        ui.heading("Sign in");
        ui.label("Pick a display name to enter the chat.");
        ui.add_space(8.0);

        let response = ui.add(
            egui::TextEdit::singleline(name_input).hint_text("Your name"),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            confirm = true;
        }

        if ui.button("Enter chat").clicked() {
            confirm = true;
        }
    });

    take_name(confirm, name_input)
}

fn take_name(confirm: bool, name_input: &mut String) -> Option<String> {
    if !confirm {
        return None;
    }

    let name = name_input.trim().to_string();
    if name.is_empty() {
        return None;
    }

    name_input.clear();
    Some(name)
}
