use crate::command::{CommandSender, VaultCommand, send};
use crate::kernel::constants::{NO_PERMISSION, PERM_INFO};
use crate::service::CapabilityKind;

impl VaultCommand {
    pub(super) fn info(&self, sender: &dyn CommandSender, args: &[&str]) {
        if !sender.has_permission(PERM_INFO) {
            send(sender, NO_PERMISSION);
            return;
        }

        if args.len() != 1 {
            send(sender, "&cUsage: /vault info");
            return;
        }

        send(sender, "");
        send(sender, "&eVault Information");
        send(sender, &format!("&7Version: &f{}", self.version));
        for kind in CapabilityKind::BUILT_IN {
            send(sender, &self.kind_summary(kind));
        }
        send(sender, "");
    }

    /// `"&7Economy: &fActive &7[First, Active]"`
    fn kind_summary(&self, kind: CapabilityKind) -> String {
        let active = self
            .services
            .active(kind)
            .map(|r| r.provider_name().to_string())
            .unwrap_or_else(|| "None".to_string());
        let registered: Vec<String> = self
            .services
            .registrations(kind)
            .iter()
            .map(|r| r.provider_name().to_string())
            .collect();
        format!("&7{}: &f{} &7[{}]", kind, active, registered.join(", "))
    }
}
