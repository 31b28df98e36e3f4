//! # Economy Contract
//!
//! [`Economy`] is the contract economy plugins implement. Identities are
//! [`Uuid`]s and every account operation takes an optional world scope;
//! providers without per-world accounts simply ignore it.
//!
//! Bank operations are optional: the default implementations answer with a
//! [`ResponseType::NotImplemented`] response naming the provider.
//!
//! Callers holding a display name instead of an id go through the adapter
//! functions at the bottom of this module, which resolve a [`PlayerRef`]
//! against the host's [`PlayerDirectory`] first.
use uuid::Uuid;

use crate::host::{PlayerDirectory, PlayerRef};
use crate::kernel::constants::NO_BANK_SUPPORT;
use crate::service::{Capability, CapabilityKind};

pub mod convert;
pub mod memory;
pub mod response;

pub use convert::{ConversionReport, convert_balances};
pub use memory::MemoryEconomy;
pub use response::{EconomyResponse, ResponseType};

/// Contract implemented by economy providers
pub trait Economy: Send + Sync {
    /// Display name of the provider
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    fn has_bank_support(&self) -> bool;

    /// Digits after the decimal point this economy keeps, or -1 if it does not round
    fn fractional_digits(&self) -> i32;

    /// Format an amount for humans, e.g. "1.50 dollars"
    fn format(&self, amount: f64) -> String;

    fn currency_name_singular(&self) -> String;

    fn currency_name_plural(&self) -> String;

    fn has_account(&self, player: Uuid, world: Option<&str>) -> bool;

    fn balance(&self, player: Uuid, world: Option<&str>) -> f64;

    /// Whether the account holds at least `amount`
    fn has(&self, player: Uuid, world: Option<&str>, amount: f64) -> bool {
        self.balance(player, world) >= amount
    }

    fn withdraw(&self, player: Uuid, world: Option<&str>, amount: f64) -> EconomyResponse;

    fn deposit(&self, player: Uuid, world: Option<&str>, amount: f64) -> EconomyResponse;

    /// Create an account; `false` when it already existed or could not be created
    fn create_account(&self, player: Uuid, world: Option<&str>) -> bool;

    fn create_bank(&self, _name: &str, _owner: Uuid) -> EconomyResponse {
        no_banks(self.name())
    }

    fn delete_bank(&self, _name: &str) -> EconomyResponse {
        no_banks(self.name())
    }

    fn bank_balance(&self, _name: &str) -> EconomyResponse {
        no_banks(self.name())
    }

    fn bank_has(&self, _name: &str, _amount: f64) -> EconomyResponse {
        no_banks(self.name())
    }

    fn bank_withdraw(&self, _name: &str, _amount: f64) -> EconomyResponse {
        no_banks(self.name())
    }

    fn bank_deposit(&self, _name: &str, _amount: f64) -> EconomyResponse {
        no_banks(self.name())
    }

    fn is_bank_owner(&self, _name: &str, _player: Uuid) -> EconomyResponse {
        no_banks(self.name())
    }

    fn is_bank_member(&self, _name: &str, _player: Uuid) -> EconomyResponse {
        no_banks(self.name())
    }

    fn banks(&self) -> Vec<String> {
        Vec::new()
    }
}

fn no_banks(provider: &str) -> EconomyResponse {
    EconomyResponse::not_implemented(format!("{}{}", provider, NO_BANK_SUPPORT))
}

impl Capability for dyn Economy {
    const KIND: CapabilityKind = CapabilityKind::Economy;

    fn provider_name(&self) -> String {
        self.name().to_string()
    }
}

/// Balance of a player given by id or name; `None` when the name is unknown
pub fn balance_of(
    economy: &dyn Economy,
    directory: &dyn PlayerDirectory,
    player: &PlayerRef,
    world: Option<&str>,
) -> Option<f64> {
    player.resolve(directory).map(|id| economy.balance(id, world))
}

/// Account check for a player given by id or name
pub fn has_account_for(
    economy: &dyn Economy,
    directory: &dyn PlayerDirectory,
    player: &PlayerRef,
    world: Option<&str>,
) -> bool {
    player
        .resolve(directory)
        .is_some_and(|id| economy.has_account(id, world))
}

/// Deposit to a player given by id or name; `None` when the name is unknown
pub fn deposit_to(
    economy: &dyn Economy,
    directory: &dyn PlayerDirectory,
    player: &PlayerRef,
    world: Option<&str>,
    amount: f64,
) -> Option<EconomyResponse> {
    player
        .resolve(directory)
        .map(|id| economy.deposit(id, world, amount))
}

/// Withdraw from a player given by id or name; `None` when the name is unknown
pub fn withdraw_from(
    economy: &dyn Economy,
    directory: &dyn PlayerDirectory,
    player: &PlayerRef,
    world: Option<&str>,
    amount: f64,
) -> Option<EconomyResponse> {
    player
        .resolve(directory)
        .map(|id| economy.withdraw(id, world, amount))
}

// Test module declaration
#[cfg(test)]
mod tests;
