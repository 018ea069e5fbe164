//! Pricing strategies, one per payment method family.

pub mod cash;
pub mod credit_card;
pub mod debit_card;

pub use cash::CashStrategy;
pub use credit_card::CreditCardStrategy;
pub use debit_card::DebitCardStrategy;
