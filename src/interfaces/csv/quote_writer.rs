use crate::domain::payment::{CardCompany, PaymentMethodType, PaymentRequest};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct QuoteRecord {
    payment_method_id: u32,
    payment_type: PaymentMethodType,
    card_company: Option<CardCompany>,
    original_price: Decimal,
    final_price: Decimal,
    installments: u32,
}

/// Writes priced requests as CSV rows.
///
/// Prices are normalized, so `1100.000` is written as `1100`.
pub struct PriceQuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PriceQuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes one row; the header is emitted with the first row.
    pub fn write_quote(&mut self, request: &PaymentRequest, final_price: Decimal) -> Result<()> {
        self.writer.serialize(QuoteRecord {
            payment_method_id: request.payment_method_id,
            payment_type: request.payment_method_type,
            card_company: request.card_company,
            original_price: request.price.normalize(),
            final_price: final_price.normalize(),
            installments: request.installments,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
