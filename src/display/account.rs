//! Account display formatting

use crate::models::Account;

use super::card::format_card_list;

/// Format an account with its cards
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("{}\n", "=".repeat(40)));
    output.push_str(&format!("Login:    {}\n", account.login));
    output.push_str(&format!("Age:      {}\n", account.age));
    output.push_str(&format!("Cards:    {}\n", account.cards.len()));
    output.push_str(&format!("Balance:  {:.2}\n", account.total_balance()));
    output.push_str(&format!(
        "Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push('\n');
    output.push_str(&format_card_list(&account.cards));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, CardKind};

    #[test]
    fn test_account_details() {
        let mut account = Account::new("manfly", "manfly1", "Andrew", 23);
        account.push_card(Card::issue(CardKind::Virtual));

        let output = format_account_details(&account);

        assert!(output.starts_with("Account: Andrew\n"));
        assert!(output.contains("Login:    manfly"));
        assert!(output.contains("Cards:    1"));
        assert!(output.contains("Balance:  150.00"));
        assert!(!output.contains("manfly1"));
    }
}
