//! Card display formatting
//!
//! Formats cards, receipts and tax previews for terminal output.

use crate::models::{Card, CardKind, CardReceipt, Operation, TransferReceipt};

/// Format an account's cards as an indexed table
pub fn format_card_list(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "There are no active cards.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<16}  {:<8}  {:>12}\n",
        "#", "Number", "Type", "Balance"
    ));
    output.push_str(&format!(
        "{:->3}  {:-<16}  {:-<8}  {:->12}\n",
        "", "", "", ""
    ));

    for (index, card) in cards.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<16}  {:<8}  {:>12.2}\n",
            index + 1,
            card.number,
            card.kind,
            card.balance
        ));
    }

    let total: f64 = cards.iter().map(|c| c.balance).sum();
    output.push_str(&format!(
        "{:>3}  {:<16}  {:<8}  {:>12.2}\n",
        "", "Total", "", total
    ));

    output
}

/// Describe a completed withdrawal
pub fn format_withdrawal(card: &Card, receipt: &CardReceipt) -> String {
    format!(
        "Money {:.2} withdrawn from {}. Balance: {:.2}. Tax: {:.2}\n",
        receipt.amount, card.number, receipt.balance, receipt.tax
    )
}

/// Describe a completed deposit
pub fn format_deposit(card: &Card, receipt: &CardReceipt) -> String {
    format!(
        "Money {:.2} was put on {}. Balance: {:.2}. Tax: {:.2}\n",
        receipt.amount, card.number, receipt.balance, receipt.tax
    )
}

/// Describe a completed transfer
pub fn format_transfer(from: &str, to: &str, receipt: &TransferReceipt) -> String {
    let mut output = format!(
        "Money {:.2} was sent from {} to {}.\n",
        receipt.amount, from, to
    );
    output.push_str(&format!(
        "  Sender balance:    {:>12.2}  (tax {:.2})\n",
        receipt.sender_balance, receipt.send_tax
    ));
    output.push_str(&format!(
        "  Recipient balance: {:>12.2}  (tax {:.2})\n",
        receipt.recipient_balance, receipt.deposit_tax
    ));
    output
}

/// Show what each operation would cost on a card of `kind`
pub fn format_tax_preview(kind: CardKind, amount: f64) -> String {
    let mut output = format!(
        "{} card (starting balance {:.2}), amount {:.2}\n",
        kind,
        kind.start_balance(),
        amount
    );
    for operation in [Operation::Withdraw, Operation::Deposit, Operation::Send] {
        let rate = kind.schedule().rate(operation);
        output.push_str(&format!(
            "  {:<9} {:>6.2}% + {:>6.2}  = {:>10.2}\n",
            operation,
            rate.percent,
            rate.fixed,
            kind.compute_tax(operation, amount)
        ));
    }
    output
}
