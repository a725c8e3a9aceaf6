use eframe::egui;

use crate::ui::state::AppState;

/// Name and message fields. Returns `(username, content)` when the user sends.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<(String, String)> {
    let enabled = !state.loading;

    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut state.username)
            .hint_text("Your name")
            .char_limit(50),
    );

    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut state.input_text).hint_text("Type a message..."),
        );
        if ui
            .add_enabled(state.can_send(), egui::Button::new("Send"))
            .clicked()
        {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    if send { state.take_draft() } else { None }
}
