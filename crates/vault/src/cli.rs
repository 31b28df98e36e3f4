use vault_core::CommandSender;
use vault_core::utils::strip_colors;

/// The operator console: holds every permission and prints plain text to stdout
#[derive(Debug, Default)]
pub struct ConsoleSender;

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn has_permission(&self, _node: &str) -> bool {
        true
    }

    fn send_message(&self, message: &str) {
        println!("{}", strip_colors(message));
    }
}
