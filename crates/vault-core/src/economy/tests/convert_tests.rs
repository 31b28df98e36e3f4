use uuid::Uuid;

use crate::economy::{Economy, MemoryEconomy, convert_balances};

#[test]
fn test_convert_matches_target_to_source() {
    let from = MemoryEconomy::new("Old");
    let to = MemoryEconomy::new("New");
    let player = Uuid::new_v4();
    from.set_balance(player, 100.0);
    to.set_balance(player, 40.0);

    let report = convert_balances(&from, &to, [player]);

    assert_eq!(to.balance(player, None), 100.0);
    assert_eq!(report.scanned, 1);
    assert_eq!(report.converted, 1);
    assert!(report.is_clean());
}

#[test]
fn test_convert_withdraws_surplus_and_creates_accounts() {
    let from = MemoryEconomy::new("Old");
    let to = MemoryEconomy::new("New");
    let rich_in_target = Uuid::new_v4();
    let new_in_target = Uuid::new_v4();
    from.set_balance(rich_in_target, 10.0);
    to.set_balance(rich_in_target, 25.5);
    from.set_balance(new_in_target, 8.25);

    let report = convert_balances(&from, &to, [rich_in_target, new_in_target]);

    assert_eq!(to.balance(rich_in_target, None), 10.0);
    assert!(to.has_account(new_in_target, None));
    assert_eq!(to.balance(new_in_target, None), 8.25);
    assert_eq!(report.converted, 2);
}

#[test]
fn test_convert_skips_players_without_source_account() {
    let from = MemoryEconomy::new("Old");
    let to = MemoryEconomy::new("New");
    let stranger = Uuid::new_v4();
    let same = Uuid::new_v4();
    from.set_balance(same, 3.0);
    to.set_balance(same, 3.0);

    let report = convert_balances(&from, &to, [stranger, same]);

    assert_eq!(report.scanned, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.unchanged, 1);
    assert_eq!(report.converted, 0);
    assert!(!to.has_account(stranger, None));
    assert_eq!(to.account_count(), 1);
}

#[test]
fn test_convert_records_rejections_and_continues() {
    let from = MemoryEconomy::new("Old");
    let to = MemoryEconomy::new("New");
    let overdrawn = Uuid::new_v4();
    let fine = Uuid::new_v4();
    // Matching a negative source balance needs a withdrawal below zero
    from.set_balance(overdrawn, -5.0);
    to.set_balance(overdrawn, 0.0);
    from.set_balance(fine, 1.0);

    let report = convert_balances(&from, &to, [overdrawn, fine]);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, overdrawn);
    assert_eq!(report.failures[0].1, "Insufficient funds");
    assert_eq!(report.converted, 1);
    assert_eq!(to.balance(fine, None), 1.0);
    assert!(!report.is_clean());
}

#[test]
fn test_convert_refuses_non_finite_source_balance() {
    let from = MemoryEconomy::new("Old");
    let to = MemoryEconomy::new("New");
    let broken = Uuid::new_v4();
    from.set_balance(broken, f64::NAN);

    let report = convert_balances(&from, &to, [broken]);

    assert_eq!(report.unchanged, 0);
    assert_eq!(report.failures, vec![(broken, "Invalid balance".to_string())]);
    assert_eq!(to.balance(broken, None), 0.0);
}
