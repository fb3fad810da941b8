//! Recording bus for host-side tests.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::bus::{Bus, DATA_MODE};
use crate::error::BusError;

/// Captures every transaction byte-for-byte and serves scripted reads.
pub struct MockBus {
    /// Completed transactions, control byte included.
    pub transactions: Vec<Vec<u8>>,
    /// Bytes handed out by `read_byte`, front first (then zeroes).
    pub read_data: VecDeque<u8>,
    /// Fail the Nth `write_byte` (0-based across the bus lifetime).
    pub fail_after: Option<usize>,
    pub clock_hz: Option<u32>,
    current: Vec<u8>,
    writes: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            read_data: VecDeque::new(),
            fail_after: None,
            clock_hz: None,
            current: Vec::new(),
            writes: 0,
        }
    }

    /// Transactions that opened in data mode (pixel traffic).
    pub fn data_transactions(&self) -> impl Iterator<Item = &[u8]> {
        self.transactions
            .iter()
            .filter(|t| t.first() == Some(&DATA_MODE))
            .map(|t| t.as_slice())
    }
}

impl Bus for MockBus {
    fn set_clock_rate(&mut self, hz: u32) -> Result<(), BusError> {
        self.clock_hz = Some(hz);
        Ok(())
    }

    fn start_transaction(&mut self, _address: u8) -> Result<(), BusError> {
        self.current.clear();
        Ok(())
    }

    fn write_byte(&mut self, b: u8) -> Result<(), BusError> {
        if let Some(limit) = self.fail_after {
            if self.writes >= limit {
                return Err(BusError::Nack);
            }
        }
        self.writes += 1;
        self.current.push(b);
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<(), BusError> {
        self.transactions.push(core::mem::take(&mut self.current));
        Ok(())
    }

    fn read_byte(&mut self, _address: u8) -> Result<u8, BusError> {
        Ok(self.read_data.pop_front().unwrap_or(0))
    }
}
