//! # Gas Meter and Evaluation Context
//!
//! `AnteContext` is created fresh for every evaluation attempt and discarded
//! when the chain completes; it is never persisted. The gas meter inside it
//! is the only intrinsic resource meter of this core.

use crate::domain::errors::AnteError;
use shared_types::{Event, Timestamp};

/// A monotonically-consuming gas counter bounded by a limit.
///
/// Consumption never decreases within one evaluation and never exceeds the
/// limit: a charge that would cross it pins consumption at the limit and
/// fails immediately.
#[derive(Clone, Debug)]
pub struct GasMeter {
    limit: u64,
    consumed: u64,
}

impl GasMeter {
    /// A meter bounded by `limit`.
    pub fn limited(limit: u64) -> Self {
        Self { limit, consumed: 0 }
    }

    /// An effectively unbounded meter, used before the setup stage installs
    /// the transaction's own limit.
    pub fn infinite() -> Self {
        Self::limited(u64::MAX)
    }

    /// Charges `amount` gas for `descriptor`.
    ///
    /// # Errors
    /// - `OutOfGas`: the charge would exceed the limit. Consumption is
    ///   pinned at the limit so the caller bills the full amount.
    pub fn consume(&mut self, amount: u64, descriptor: &'static str) -> Result<(), AnteError> {
        let next = self.consumed.saturating_add(amount);
        if next > self.limit {
            self.consumed = self.limit;
            return Err(AnteError::OutOfGas {
                descriptor,
                limit: self.limit,
            });
        }
        self.consumed = next;
        Ok(())
    }

    /// Gas consumed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// The bound this meter enforces.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Gas still available.
    pub fn remaining(&self) -> u64 {
        self.limit - self.consumed
    }
}

/// Mutable per-evaluation state threaded through the decorator chain.
#[derive(Clone, Debug)]
pub struct AnteContext {
    /// Chain identifier, bound into every sign document.
    pub chain_id: String,
    /// Height of the block this evaluation runs against. Height zero is
    /// pre-genesis: sign documents then use account number zero.
    pub block_height: u64,
    /// Deterministic block time; allowance expiry is judged against this,
    /// never wall-clock time.
    pub block_time: Timestamp,
    gas_meter: GasMeter,
    events: Vec<Event>,
}

impl AnteContext {
    /// A fresh context with an unbounded meter; the setup stage installs
    /// the transaction's declared limit.
    pub fn new(chain_id: impl Into<String>, block_height: u64, block_time: Timestamp) -> Self {
        Self {
            chain_id: chain_id.into(),
            block_height,
            block_time,
            gas_meter: GasMeter::infinite(),
            events: Vec::new(),
        }
    }

    /// The current gas meter.
    pub fn gas_meter(&self) -> &GasMeter {
        &self.gas_meter
    }

    /// Mutable access for consuming gas.
    pub fn gas_meter_mut(&mut self) -> &mut GasMeter {
        &mut self.gas_meter
    }

    /// Replaces the meter; used once, by the setup stage.
    pub fn set_gas_meter(&mut self, meter: GasMeter) {
        self.gas_meter = meter;
    }

    /// Appends an event to the evaluation's record.
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Events accumulated so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
