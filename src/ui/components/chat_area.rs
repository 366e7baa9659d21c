use crate::common::{ChatMessage, UserProfile};

const AVATAR_SIZE: f32 = 24.0;

/// Every entry shows the avatar of the current session user, not the sender's.
pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage], user: Option<&UserProfile>) {
    let avatar_url = user.and_then(|user| user.avatar_url.as_deref());
    let alt = user.and_then(|user| user.name.as_deref()).unwrap_or_default();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        if let Some(url) = avatar_url {
                            ui.add(
                                egui::Image::new(url)
                                    .max_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE)),
                            )
                            .on_hover_text(alt);
                        }
                        ui.label(egui::RichText::new(&message.from).strong());
                        ui.label(egui::RichText::new(message.time_label()).weak());
                    });
                    ui.label(&message.text);
                });
            }
        });
}
