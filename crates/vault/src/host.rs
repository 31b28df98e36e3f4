use std::sync::Arc;

use vault_core::config::HostSeed;
use vault_core::economy::{Economy, MemoryEconomy};
use vault_core::host::{MemoryDirectory, MemoryPlayer, PlayerIdentity};
use vault_core::{ServicePriority, ServiceRegistry};

/// Build the simulated host's players from the config seed
pub fn build_directory(seed: &HostSeed) -> MemoryDirectory {
    let directory = MemoryDirectory::new();
    for player in &seed.players {
        let identity = PlayerIdentity::new(player.id, player.name.clone());
        if player.online {
            directory.connect(MemoryPlayer::new(identity, player.permissions.clone()));
        } else {
            directory.add_known(identity);
        }
    }
    directory
}

/// Register one in-memory economy per seed, with its starting balances
pub fn register_economies(seed: &HostSeed, services: &ServiceRegistry) {
    for economy_seed in &seed.economies {
        let priority = match economy_seed.priority.as_deref() {
            Some(raw) => ServicePriority::parse(raw).unwrap_or_else(|| {
                log::warn!(
                    "Unknown priority '{}' for economy '{}'; using normal",
                    raw,
                    economy_seed.name
                );
                ServicePriority::NORMAL
            }),
            None => ServicePriority::NORMAL,
        };

        let economy = Arc::new(MemoryEconomy::with_currency(
            economy_seed.name.clone(),
            economy_seed.currency_singular.clone(),
            economy_seed.currency_plural.clone(),
        ));
        for (id, balance) in &economy_seed.balances {
            economy.set_balance(*id, *balance);
        }

        let owner = economy_seed
            .owner
            .clone()
            .unwrap_or_else(|| economy_seed.name.clone());
        let provider: Arc<dyn Economy> = economy;
        services.register_provider(provider, owner, priority);
    }
}
