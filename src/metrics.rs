use std::sync::atomic::{AtomicU64, Ordering};

pub static REFRESH_CALLS: AtomicU64 = AtomicU64::new(0);
pub static EMITTED_RECORDS: AtomicU64 = AtomicU64::new(0);
pub static CONTRACT_FAULTS: AtomicU64 = AtomicU64::new(0);

pub fn get_refresh_calls() -> i64 { REFRESH_CALLS.load(Ordering::Relaxed) as i64 }
pub fn get_emitted_records() -> i64 { EMITTED_RECORDS.load(Ordering::Relaxed) as i64 }
pub fn get_contract_faults() -> i64 { CONTRACT_FAULTS.load(Ordering::Relaxed) as i64 }
