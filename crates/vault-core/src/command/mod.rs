//! # Operator Commands
//!
//! The `/vault` command: `info` lists the active and registered provider for
//! each capability kind, `convert <from> <to>` migrates balances between two
//! registered economies, and anything else shows the paged help.
//!
//! Output goes through a [`CommandSender`], the host's handle on whoever ran
//! the command. Messages use `&` colour codes and are colorized before sending.
use std::sync::Arc;

use crate::host::PlayerDirectory;
use crate::kernel::constants::{self, APP_VERSION, HELP_ITEMS_PER_PAGE, NO_PERMISSION};
use crate::service::ServiceRegistry;
use crate::utils::colorize;

mod convert;
mod info;

/// Whoever issued a command: a player or the console
pub trait CommandSender {
    fn name(&self) -> &str;

    fn has_permission(&self, node: &str) -> bool;

    /// Deliver one already-colorized line
    fn send_message(&self, message: &str);
}

const HELP_ENTRIES: [&str; 2] = [
    "&f/vault info &7- Displays info about Vault.",
    "&f/vault convert &7- Converts from one economy to another.",
];

/// Handler for the `/vault` command
pub struct VaultCommand {
    services: Arc<ServiceRegistry>,
    directory: Arc<dyn PlayerDirectory>,
    version: String,
}

impl VaultCommand {
    pub fn new(services: Arc<ServiceRegistry>, directory: Arc<dyn PlayerDirectory>) -> Self {
        Self {
            services,
            directory,
            version: APP_VERSION.to_string(),
        }
    }

    /// Override the version shown by `info`
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Run the command with `args` (the words after `/vault`).
    ///
    /// Every outcome, including adjustments a provider rejects during
    /// `convert`, is reported to the sender.
    pub fn execute(&self, sender: &dyn CommandSender, args: &[&str]) {
        log::debug!("{} ran /vault {}", sender.name(), args.join(" "));
        let sub_command = args.first().map(|s| s.to_lowercase());
        match sub_command.as_deref() {
            Some("info") => self.info(sender, args),
            Some("convert") => self.convert(sender, args),
            _ => self.help(sender, args),
        }
    }

    fn help(&self, sender: &dyn CommandSender, args: &[&str]) {
        if !sender.has_permission(constants::PERM_MAIN) {
            send(sender, NO_PERMISSION);
            return;
        }

        let max_pages = HELP_ENTRIES.len().div_ceil(HELP_ITEMS_PER_PAGE);
        let page = match args.get(1) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(page) if (1..=max_pages).contains(&page) => page,
                _ => {
                    send(
                        sender,
                        &format!("&cInvalid page number. Choose between 1 and {}.", max_pages),
                    );
                    return;
                }
            },
            None => 1,
        };

        send(sender, "");
        send(sender, &format!("&eVault Help &7(Page {}/{})", page, max_pages));
        HELP_ENTRIES
            .iter()
            .skip((page - 1) * HELP_ITEMS_PER_PAGE)
            .take(HELP_ITEMS_PER_PAGE)
            .for_each(|entry| send(sender, entry));
        send(sender, "");
        send(sender, "&7Type &f/vault help <page> &7for more commands.");
        send(sender, "");
    }
}

fn send(sender: &dyn CommandSender, line: &str) {
    sender.send_message(&colorize(line));
}
