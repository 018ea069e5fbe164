use crate::domain::fee_schedule::FeeSchedule;
use crate::domain::ports::FeeScheduleProvider;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory provider of fee schedules.
///
/// Uses `Arc<RwLock<HashMap<u32, FeeSchedule>>>` so clones share the same
/// catalog. Lookups hand out a snapshot of the schedule.
#[derive(Default, Clone)]
pub struct InMemoryFeeScheduleProvider {
    schedules: Arc<RwLock<HashMap<u32, FeeSchedule>>>,
}

impl InMemoryFeeScheduleProvider {
    /// Creates a new, empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider serving the given schedules.
    pub fn from_catalog(catalog: HashMap<u32, FeeSchedule>) -> Self {
        Self {
            schedules: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Adds or replaces the schedule for `payment_method_id`.
    pub async fn insert(&self, payment_method_id: u32, schedule: FeeSchedule) {
        let mut schedules = self.schedules.write().await;
        schedules.insert(payment_method_id, schedule);
    }
}

#[async_trait]
impl FeeScheduleProvider for InMemoryFeeScheduleProvider {
    async fn lookup(&self, payment_method_id: u32) -> Result<Option<FeeSchedule>> {
        let schedules = self.schedules.read().await;
        Ok(schedules.get(&payment_method_id).cloned())
    }
}
