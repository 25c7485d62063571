use crate::domain::{DateRange, RecognitionBasis, Transaction};

/// Computes signed account balances straight from the posted vouchers.
///
/// Every call re-scans the borrowed transaction slice; nothing is cached, so
/// the result only depends on the arguments and the slice contents.
#[derive(Debug, Clone, Copy)]
pub struct LedgerBalanceEngine<'a> {
    transactions: &'a [Transaction],
}

impl<'a> LedgerBalanceEngine<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    /// Posted transactions inside `range` that `basis` admits, in source order.
    pub fn eligible(
        &self,
        range: DateRange,
        basis: RecognitionBasis,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.transactions
            .iter()
            .filter(move |txn| txn.is_posted() && range.contains(txn.date) && basis.admits(txn))
    }

    /// Net debit (positive) or credit (negative) exposure of `code` over `range`.
    pub fn balance_of(&self, code: &str, range: DateRange, basis: RecognitionBasis) -> f64 {
        let balance = self
            .eligible(range, basis)
            .fold(0.0, |sum, txn| sum + txn.effect_on(code));
        tracing::trace!(account = code, ?basis, balance, "computed balance");
        balance
    }
}
