use uuid::Uuid;

use crate::economy::{Economy, EconomyResponse};

/// Outcome of a bulk balance conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionReport {
    /// Identities looked at
    pub scanned: usize,
    /// Identities whose target balance was changed
    pub converted: usize,
    /// Identities whose balances already matched
    pub unchanged: usize,
    /// Identities without an account in the source economy
    pub skipped: usize,
    /// Identities whose adjustment the target rejected, with its message
    pub failures: Vec<(Uuid, String)>,
}

impl ConversionReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Copy every balance from `from` into `to`.
///
/// For each identity holding an account in `from`, the account is created in
/// `to` and the signed difference is deposited or withdrawn so both balances
/// match. There is no transaction around the scan: a rejected adjustment is
/// recorded and the scan moves on, and an interrupted run leaves the identities
/// processed so far converted.
///
/// This performs two provider round-trips per identity. Run it off the
/// primary control path.
pub fn convert_balances<I>(from: &dyn Economy, to: &dyn Economy, players: I) -> ConversionReport
where
    I: IntoIterator<Item = Uuid>,
{
    let mut report = ConversionReport::default();

    for id in players {
        report.scanned += 1;

        if !from.has_account(id, None) {
            report.skipped += 1;
            continue;
        }

        to.create_account(id, None);
        let difference = from.balance(id, None) - to.balance(id, None);

        let response = if !difference.is_finite() {
            EconomyResponse::failure(0.0, to.balance(id, None), "Invalid balance")
        } else if difference > 0.0 {
            to.deposit(id, None, difference)
        } else if difference < 0.0 {
            to.withdraw(id, None, -difference)
        } else {
            report.unchanged += 1;
            continue;
        };

        if response.transaction_success() {
            report.converted += 1;
        } else {
            let message = response
                .error_message
                .unwrap_or_else(|| format!("{:?}", response.kind));
            log::warn!(
                "Conversion of {} from '{}' to '{}' failed: {}",
                id,
                from.name(),
                to.name(),
                message
            );
            report.failures.push((id, message));
        }
    }

    log::info!(
        "Converted balances from '{}' to '{}': {} scanned, {} converted, {} unchanged, {} skipped, {} failed",
        from.name(),
        to.name(),
        report.scanned,
        report.converted,
        report.unchanged,
        report.skipped,
        report.failures.len()
    );
    report
}
