//! # Forms
//!
//! Field state and submission rules for the add-friend and split-bill forms.
//! Both forms reject incomplete submissions silently by returning `None`.

use uuid::Uuid;

use crate::core::ledger::Friend;

pub const DEFAULT_FRIEND_IMAGE: &str = "https://i.pravatar.cc/48";

// ============================================================================
// Add friend
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: DEFAULT_FRIEND_IMAGE.to_string(),
        }
    }
}

impl AddFriendForm {
    /// Builds a new friend with a fresh id and resets the form.
    pub fn submit(&mut self) -> Option<Friend> {
        if self.name.is_empty() || self.image.is_empty() {
            return None;
        }

        let id = Uuid::new_v4().to_string();
        let image = format!("{}?={}", self.image, id);
        let friend = Friend::new(id, std::mem::take(&mut self.name), image);

        *self = Self::default();
        Some(friend)
    }
}

// ============================================================================
// Split bill
// ============================================================================

/// Who paid the whole bill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn toggle(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitBillForm {
    bill: String,
    expense: String,
    pub payer: Payer,
}

impl SplitBillForm {
    pub fn bill_text(&self) -> &str {
        &self.bill
    }

    pub fn expense_text(&self) -> &str {
        &self.expense
    }

    pub fn bill(&self) -> Option<f64> {
        parse_amount(&self.bill)
    }

    pub fn expense(&self) -> Option<f64> {
        parse_amount(&self.expense)
    }

    /// Replaces the bill text. Rejected unless it is a valid amount (or empty).
    ///
    /// An expense left larger than the new bill is clamped down to it.
    pub fn set_bill(&mut self, text: &str) -> bool {
        if !is_amount_text(text) {
            return false;
        }
        self.bill = text.to_string();
        if self.expense().unwrap_or(0.0) > self.bill().unwrap_or(0.0) {
            self.expense = self.bill.clone();
        }
        true
    }

    /// Replaces the expense text. An expense larger than the bill is rejected
    /// and the previous value kept, so the friend's share never goes negative.
    pub fn set_expense(&mut self, text: &str) -> bool {
        if !is_amount_text(text) {
            return false;
        }
        let value = parse_amount(text).unwrap_or(0.0);
        if value > self.bill().unwrap_or(0.0) {
            return false;
        }
        self.expense = text.to_string();
        true
    }

    /// What the friend spent: `bill - expense`, or `None` while the bill is empty.
    pub fn friend_share(&self) -> Option<f64> {
        let bill = self.bill().filter(|b| *b != 0.0)?;
        Some(bill - self.expense().unwrap_or(0.0))
    }

    /// The signed amount to apply to the selected friend's balance.
    ///
    /// A zero bill or zero expense counts as missing.
    pub fn submit(&self) -> Option<f64> {
        let bill = self.bill().filter(|b| *b != 0.0)?;
        let expense = self.expense().filter(|e| *e != 0.0)?;

        Some(match self.payer {
            Payer::User => bill - expense,
            Payer::Friend => -expense,
        })
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Digits with at most one decimal point.
fn is_amount_text(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.chars().filter(|c| *c == '.').count() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(bill: &str, expense: &str, payer: Payer) -> SplitBillForm {
        let mut form = SplitBillForm::default();
        assert!(form.set_bill(bill));
        assert!(form.set_expense(expense));
        form.payer = payer;
        form
    }

    #[test]
    fn test_friend_share() {
        let form = form("100", "30", Payer::User);
        assert_eq!(form.friend_share(), Some(70.0));
    }

    #[test]
    fn test_submit_user_pays() {
        assert_eq!(form("100", "30", Payer::User).submit(), Some(70.0));
    }

    #[test]
    fn test_submit_friend_pays() {
        assert_eq!(form("100", "30", Payer::Friend).submit(), Some(-30.0));
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut form = SplitBillForm::default();
        assert_eq!(form.submit(), None);
        form.set_bill("100");
        assert_eq!(form.submit(), None);
        form.set_expense("0");
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_expense_clamped_to_bill() {
        let mut form = form("50", "20", Payer::User);
        assert!(!form.set_expense("60"));
        assert_eq!(form.expense_text(), "20");
        assert!(form.set_expense("50"));
        assert_eq!(form.friend_share(), Some(0.0));
    }

    #[test]
    fn test_lowering_bill_clamps_expense() {
        let mut form = form("100", "80", Payer::User);
        assert!(form.set_bill("10"));
        assert_eq!(form.expense_text(), "10");
        assert_eq!(form.friend_share(), Some(0.0));
        assert_eq!(form.submit(), Some(0.0));

        assert!(form.set_bill(""));
        assert_eq!(form.expense_text(), "");
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_raising_bill_keeps_expense() {
        let mut form = form("100", "80", Payer::User);
        assert!(form.set_bill("1000"));
        assert_eq!(form.expense_text(), "80");
        assert_eq!(form.friend_share(), Some(920.0));
    }

    #[test]
    fn test_expense_rejected_without_bill() {
        let mut form = SplitBillForm::default();
        assert!(!form.set_expense("5"));
        assert!(form.set_expense(""));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let mut form = SplitBillForm::default();
        assert!(!form.set_bill("12a"));
        assert!(!form.set_bill("1.2.3"));
        assert!(form.set_bill("12.5"));
        assert_eq!(form.bill(), Some(12.5));
    }

    #[test]
    fn test_share_empty_without_bill() {
        assert_eq!(SplitBillForm::default().friend_share(), None);
    }

    #[test]
    fn test_add_friend_rejects_empty_name() {
        let mut form = AddFriendForm::default();
        assert!(form.submit().is_none());

        form.name = "Dana".to_string();
        form.image.clear();
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_add_friend_builds_record_and_resets() {
        let mut form = AddFriendForm {
            name: "Dana".to_string(),
            ..Default::default()
        };

        let friend = form.submit().unwrap();
        assert_eq!(friend.name, "Dana");
        assert_eq!(friend.balance, 0.0);
        assert_eq!(friend.image, format!("{DEFAULT_FRIEND_IMAGE}?={}", friend.id));
        assert_eq!(form, AddFriendForm::default());
    }

    #[test]
    fn test_add_friend_ids_unique() {
        let mut a = AddFriendForm { name: "A".to_string(), ..Default::default() };
        let mut b = AddFriendForm { name: "B".to_string(), ..Default::default() };
        assert_ne!(a.submit().unwrap().id, b.submit().unwrap().id);
    }

    #[test]
    fn test_payer_toggle() {
        assert_eq!(Payer::User.toggle(), Payer::Friend);
        assert_eq!(Payer::Friend.toggle(), Payer::User);
    }
}
