use crate::domain::fee_schedule::{FeePlan, FeeSchedule};
use crate::domain::payment::CardCompany;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

pub const CASH_LIST_PRICE: u32 = 1;
pub const CASH_DISCOUNT: u32 = 2;
pub const DEBIT_CARD_LIST_PRICE: u32 = 3;
pub const CREDIT_CARD_ONE_PAYMENT: u32 = 4;
pub const CREDIT_CARD_EXTRA_CHARGE: u32 = 5;
pub const CREDIT_CARD_INSTALLMENTS: u32 = 6;

fn plan(card_company: CardCompany, installments: u32, percentage: Decimal) -> FeePlan {
    FeePlan {
        card_company,
        installments,
        percentage,
    }
}

/// Fee schedules used when no catalog file is given.
pub fn sample_catalog() -> HashMap<u32, FeeSchedule> {
    HashMap::from([
        (CASH_LIST_PRICE, FeeSchedule::flat(dec!(0))),
        (CASH_DISCOUNT, FeeSchedule::flat(dec!(-10))),
        (DEBIT_CARD_LIST_PRICE, FeeSchedule::flat(dec!(0))),
        (CREDIT_CARD_ONE_PAYMENT, FeeSchedule::flat(dec!(0))),
        (CREDIT_CARD_EXTRA_CHARGE, FeeSchedule::flat(dec!(10))),
        (
            CREDIT_CARD_INSTALLMENTS,
            FeeSchedule::with_plans(
                dec!(0),
                vec![
                    plan(CardCompany::ViCard, 3, dec!(10)),
                    plan(CardCompany::ViCard, 6, dec!(20)),
                    plan(CardCompany::ViCard, 12, dec!(35)),
                    plan(CardCompany::ViCard, 18, dec!(50)),
                    plan(CardCompany::ACard, 3, dec!(5)),
                    plan(CardCompany::ACard, 6, dec!(12)),
                    plan(CardCompany::ACard, 12, dec!(25)),
                    // MYCARD offers interest-free 3 payments and no 12 payment plan.
                    plan(CardCompany::MyCard, 3, dec!(0)),
                    plan(CardCompany::MyCard, 6, dec!(8)),
                ],
            ),
        ),
    ])
}
