use crate::common::UserProfile;

pub const TITLE: &str = "Chat";

#[derive(Default)]
pub struct HeaderActions {
    pub logout: bool,
}

pub fn render(ui: &mut egui::Ui, user: Option<&UserProfile>) -> HeaderActions {
    let mut actions = HeaderActions::default();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(TITLE);
            ui.label(welcome_line(user));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Logout").clicked() {
                actions.logout = true;
            }
        });
    });

    actions
}

pub fn welcome_line(user: Option<&UserProfile>) -> String {
    let name = user
        .and_then(|user| user.name.as_deref())
        .unwrap_or_default();
    format!("Welcome, {name}")
}

#[cfg(test)]
mod tests {
    use super::welcome_line;
    use crate::common::UserProfile;

    #[test]
    fn welcome_line_interpolates_name() {
        let user = UserProfile::named("octocat");
        assert_eq!(welcome_line(Some(&user)), "Welcome, octocat");
    }

    #[test]
    fn welcome_line_without_user_is_blank() {
        assert_eq!(welcome_line(None), "Welcome, ");
        assert_eq!(welcome_line(Some(&UserProfile::default())), "Welcome, ");
    }
}
