use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::economy::{Economy, EconomyResponse};

#[derive(Debug, Default)]
struct Bank {
    owner: Uuid,
    balance: f64,
}

#[derive(Debug, Default)]
struct Ledger {
    accounts: HashMap<Uuid, f64>,
    banks: HashMap<String, Bank>,
}

/// Reference economy keeping balances in memory.
///
/// World scopes are ignored: every player has one account. Amounts are
/// rounded to two fractional digits.
#[derive(Debug)]
pub struct MemoryEconomy {
    name: String,
    singular: String,
    plural: String,
    ledger: RwLock<Ledger>,
}

impl MemoryEconomy {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_currency(name, "dollar", "dollars")
    }

    pub fn with_currency(
        name: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            singular: singular.into(),
            plural: plural.into(),
            ledger: RwLock::new(Ledger::default()),
        }
    }

    /// Seed an account with a balance, creating it if needed
    pub fn set_balance(&self, player: Uuid, balance: f64) {
        self.ledger.write().accounts.insert(player, round(balance));
    }

    /// Number of player accounts
    pub fn account_count(&self) -> usize {
        self.ledger.read().accounts.len()
    }
}

fn round(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

impl Economy for MemoryEconomy {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn has_bank_support(&self) -> bool {
        true
    }

    fn fractional_digits(&self) -> i32 {
        2
    }

    fn format(&self, amount: f64) -> String {
        let unit = if (amount - 1.0).abs() < f64::EPSILON {
            &self.singular
        } else {
            &self.plural
        };
        format!("{:.2} {}", amount, unit)
    }

    fn currency_name_singular(&self) -> String {
        self.singular.clone()
    }

    fn currency_name_plural(&self) -> String {
        self.plural.clone()
    }

    fn has_account(&self, player: Uuid, _world: Option<&str>) -> bool {
        self.ledger.read().accounts.contains_key(&player)
    }

    fn balance(&self, player: Uuid, _world: Option<&str>) -> f64 {
        self.ledger.read().accounts.get(&player).copied().unwrap_or(0.0)
    }

    fn withdraw(&self, player: Uuid, _world: Option<&str>, amount: f64) -> EconomyResponse {
        if !amount.is_finite() {
            return invalid_amount(self.balance(player, None));
        }
        if amount < 0.0 {
            return EconomyResponse::failure(0.0, self.balance(player, None), "Cannot withdraw negative funds");
        }

        let mut ledger = self.ledger.write();
        let Some(balance) = ledger.accounts.get_mut(&player) else {
            return EconomyResponse::failure(0.0, 0.0, "Account does not exist");
        };
        let amount = round(amount);
        if *balance < amount {
            return EconomyResponse::failure(0.0, *balance, "Insufficient funds");
        }
        *balance = round(*balance - amount);
        EconomyResponse::success(amount, *balance)
    }

    fn deposit(&self, player: Uuid, _world: Option<&str>, amount: f64) -> EconomyResponse {
        if !amount.is_finite() {
            return invalid_amount(self.balance(player, None));
        }
        if amount < 0.0 {
            return EconomyResponse::failure(0.0, self.balance(player, None), "Cannot deposit negative funds");
        }

        let mut ledger = self.ledger.write();
        let Some(balance) = ledger.accounts.get_mut(&player) else {
            return EconomyResponse::failure(0.0, 0.0, "Account does not exist");
        };
        let amount = round(amount);
        *balance = round(*balance + amount);
        EconomyResponse::success(amount, *balance)
    }

    fn create_account(&self, player: Uuid, _world: Option<&str>) -> bool {
        let mut ledger = self.ledger.write();
        if ledger.accounts.contains_key(&player) {
            return false;
        }
        ledger.accounts.insert(player, 0.0);
        true
    }

    fn create_bank(&self, name: &str, owner: Uuid) -> EconomyResponse {
        let mut ledger = self.ledger.write();
        if ledger.banks.contains_key(name) {
            return EconomyResponse::failure(0.0, 0.0, format!("Bank '{}' already exists", name));
        }
        ledger.banks.insert(
            name.to_string(),
            Bank {
                owner,
                ..Bank::default()
            },
        );
        EconomyResponse::success(0.0, 0.0)
    }

    fn delete_bank(&self, name: &str) -> EconomyResponse {
        match self.ledger.write().banks.remove(name) {
            Some(bank) => EconomyResponse::success(0.0, bank.balance),
            None => missing_bank(name),
        }
    }

    fn bank_balance(&self, name: &str) -> EconomyResponse {
        match self.ledger.read().banks.get(name) {
            Some(bank) => EconomyResponse::success(0.0, bank.balance),
            None => missing_bank(name),
        }
    }

    fn bank_has(&self, name: &str, amount: f64) -> EconomyResponse {
        match self.ledger.read().banks.get(name) {
            Some(bank) if bank.balance >= amount => EconomyResponse::success(amount, bank.balance),
            Some(bank) => EconomyResponse::failure(amount, bank.balance, "Insufficient funds"),
            None => missing_bank(name),
        }
    }

    fn bank_withdraw(&self, name: &str, amount: f64) -> EconomyResponse {
        let mut ledger = self.ledger.write();
        let Some(bank) = ledger.banks.get_mut(name) else {
            return missing_bank(name);
        };
        if !amount.is_finite() {
            return invalid_amount(bank.balance);
        }
        let amount = round(amount);
        if amount < 0.0 || bank.balance < amount {
            return EconomyResponse::failure(0.0, bank.balance, "Insufficient funds");
        }
        bank.balance = round(bank.balance - amount);
        EconomyResponse::success(amount, bank.balance)
    }

    fn bank_deposit(&self, name: &str, amount: f64) -> EconomyResponse {
        let mut ledger = self.ledger.write();
        let Some(bank) = ledger.banks.get_mut(name) else {
            return missing_bank(name);
        };
        if !amount.is_finite() {
            return invalid_amount(bank.balance);
        }
        if amount < 0.0 {
            return EconomyResponse::failure(0.0, bank.balance, "Cannot deposit negative funds");
        }
        let amount = round(amount);
        bank.balance = round(bank.balance + amount);
        EconomyResponse::success(amount, bank.balance)
    }

    fn is_bank_owner(&self, name: &str, player: Uuid) -> EconomyResponse {
        match self.ledger.read().banks.get(name) {
            Some(bank) if bank.owner == player => EconomyResponse::success(0.0, bank.balance),
            Some(bank) => EconomyResponse::failure(0.0, bank.balance, "Not the bank owner"),
            None => missing_bank(name),
        }
    }

    fn is_bank_member(&self, name: &str, player: Uuid) -> EconomyResponse {
        match self.ledger.read().banks.get(name) {
            // Banks here have no member list beyond their owner
            Some(bank) if bank.owner == player => EconomyResponse::success(0.0, bank.balance),
            Some(bank) => EconomyResponse::failure(0.0, bank.balance, "Not a bank member"),
            None => missing_bank(name),
        }
    }

    fn banks(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ledger.read().banks.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Response for NaN and infinite amounts
fn invalid_amount(balance: f64) -> EconomyResponse {
    EconomyResponse::failure(0.0, balance, "Invalid amount")
}

fn missing_bank(name: &str) -> EconomyResponse {
    EconomyResponse::failure(0.0, 0.0, format!("Bank '{}' does not exist", name))
}
