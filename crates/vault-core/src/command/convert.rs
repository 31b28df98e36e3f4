use crate::command::{CommandSender, VaultCommand, send};
use crate::economy::{self, Economy};
use crate::kernel::constants::{NO_PERMISSION, PERM_CONVERT};
use crate::service::{CapabilityKind, normalize_provider_name};

impl VaultCommand {
    pub(super) fn convert(&self, sender: &dyn CommandSender, args: &[&str]) {
        if !sender.has_permission(PERM_CONVERT) {
            send(sender, NO_PERMISSION);
            return;
        }

        let [_, from_name, to_name] = args else {
            send(sender, "&cUsage: /vault convert [econ1] [econ2]");
            return;
        };

        let registered = self.services.registrations(CapabilityKind::Economy);
        if registered.len() < 2 {
            send(sender, "&cYou must have at least two economies loaded to convert.");
            return;
        }

        let from = self.services.find_provider::<dyn Economy>(from_name);
        let to = self.services.find_provider::<dyn Economy>(to_name);
        let (Some(from), Some(to)) = (from, to) else {
            let missing = if self.services.find_by_name(CapabilityKind::Economy, from_name).is_none() {
                from_name
            } else {
                to_name
            };
            let mut valid: Vec<String> = registered
                .iter()
                .map(|r| normalize_provider_name(r.provider_name()))
                .collect();
            valid.sort();
            valid.dedup();
            send(
                sender,
                &format!("&cCould not find {} loaded on the server; check your spelling.", missing),
            );
            send(sender, &format!("&cValid economies are: &e{}", valid.join(", ")));
            return;
        };

        send(sender, "&eThis may take some time to convert; expect server lag.");
        log::info!(
            "{} started converting balances from '{}' to '{}'",
            sender.name(),
            from.name(),
            to.name()
        );

        let players = self.directory.known_players().into_iter().map(|p| p.id);
        let report = economy::convert_balances(from.as_ref(), to.as_ref(), players);

        send(
            sender,
            &format!(
                "&7Scanned {} player(s): {} converted, {} already matching, {} without an account.",
                report.scanned, report.converted, report.unchanged, report.skipped
            ),
        );
        for (id, message) in &report.failures {
            send(sender, &format!("&cCould not convert {}: {}", id, message));
        }
        send(sender, "&aConversion complete. Please verify the data before using it.");
    }
}
