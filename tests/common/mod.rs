use payment_pricing::application::context::PricingContext;
use payment_pricing::infrastructure::in_memory::InMemoryFeeScheduleProvider;
use payment_pricing::infrastructure::sample_catalog::sample_catalog;
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "payment_method_id,payment_type,price,card_company,installments";

#[allow(dead_code)]
pub fn sample_context() -> PricingContext {
    PricingContext::with_default_strategies(Box::new(InMemoryFeeScheduleProvider::from_catalog(
        sample_catalog(),
    )))
}

#[allow(dead_code)]
pub fn write_requests(rows: &[&str]) -> Result<NamedTempFile, std::io::Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{}", HEADER)?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}
