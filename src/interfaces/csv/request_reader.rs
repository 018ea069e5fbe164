use crate::domain::payment::{CardCompany, PaymentMethodType, PaymentRequest};
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// Raw CSV row before validation.
#[derive(Debug, Deserialize)]
struct PaymentRecord {
    payment_method_id: u32,
    payment_type: PaymentMethodType,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
    card_company: Option<CardCompany>,
    installments: Option<u32>,
}

impl TryFrom<PaymentRecord> for PaymentRequest {
    type Error = PricingError;

    fn try_from(record: PaymentRecord) -> Result<Self> {
        PaymentRequest::new(
            record.payment_method_id,
            record.payment_type,
            record.price,
            record.card_company,
            record.installments.unwrap_or(1),
        )
    }
}

/// Reads payment requests from a CSV source.
///
/// Expects the header `payment_method_id,payment_type,price,card_company,installments`.
/// An empty `card_company` means no issuer and an empty `installments` means a
/// single payment.
pub struct PaymentRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentRequestReader<R> {
    /// Creates a new `PaymentRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates requests.
    ///
    /// A malformed row yields an error without ending the stream.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize::<PaymentRecord>()
            .map(|result| result.map_err(PricingError::from).and_then(PaymentRequest::try_from))
    }
}
