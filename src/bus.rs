//! Synchronous bus transport the rendering core drives.
//!
//! The core only needs four capabilities: open a transaction to the panel
//! address, push bytes into it, close it, and (for hardware-readback mode)
//! read one byte back. Everything blocks until complete; there is no
//! partial-write signaling.
//!
//! [`I2cBus`] adapts any `embedded_hal::i2c::I2c` to this trait by staging
//! a transaction in a host buffer and emitting it as one I2C write on
//! `end_transaction`.

use embedded_hal::i2c::{Error as I2cErrorTrait, ErrorKind, I2c};

use crate::error::BusError;

/// Control byte opening a command transaction.
pub const COMMAND_MODE: u8 = 0x00;
/// Control byte opening a data (GDDRAM) transaction.
pub const DATA_MODE: u8 = 0x40;

/// Blocking transport to the panel.
///
/// A transaction is `start_transaction` .. `end_transaction`; `write_byte`
/// is only valid in between. `read_byte` is its own short read transaction
/// and is only exercised by hardware-readback mode.
pub trait Bus {
    /// Configure the bus clock. Called once at construction.
    fn set_clock_rate(&mut self, hz: u32) -> Result<(), BusError>;

    /// Open a transaction addressed to `address`.
    fn start_transaction(&mut self, address: u8) -> Result<(), BusError>;

    /// Append one byte to the open transaction.
    fn write_byte(&mut self, b: u8) -> Result<(), BusError>;

    /// Close and transmit the open transaction.
    fn end_transaction(&mut self) -> Result<(), BusError>;

    /// Read one data byte back from `address`.
    fn read_byte(&mut self, address: u8) -> Result<u8, BusError>;
}

/// Largest single transaction: one control byte plus a full 128x64 frame.
const STAGE_BYTES: usize = 1 + 128 * 8;

/// [`Bus`] over any blocking `embedded-hal` I2C peripheral.
///
/// Bytes are staged host-side and flushed as one write, since `I2c` exposes
/// whole-slice transfers rather than open transactions. Clock rate is owned
/// by HAL-level bus setup, so `set_clock_rate` only records the request.
pub struct I2cBus<I2C> {
    i2c: I2C,
    stage: [u8; STAGE_BYTES],
    len: usize,
    address: u8,
    open: bool,
}

impl<I2C: I2c> I2cBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            stage: [0; STAGE_BYTES],
            len: 0,
            address: 0,
            open: false,
        }
    }

    /// Give the peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

fn map_i2c_error<E: I2cErrorTrait>(e: E) -> BusError {
    match e.kind() {
        ErrorKind::NoAcknowledge(_) => BusError::Nack,
        ErrorKind::ArbitrationLoss | ErrorKind::Bus => BusError::Bus,
        ErrorKind::Overrun => BusError::Overrun,
        _ => BusError::Other,
    }
}

impl<I2C: I2c> Bus for I2cBus<I2C> {
    fn set_clock_rate(&mut self, hz: u32) -> Result<(), BusError> {
        log::debug!("bus clock requested: {} Hz (configured at HAL level)", hz);
        Ok(())
    }

    fn start_transaction(&mut self, address: u8) -> Result<(), BusError> {
        self.address = address;
        self.len = 0;
        self.open = true;
        Ok(())
    }

    fn write_byte(&mut self, b: u8) -> Result<(), BusError> {
        if !self.open || self.len >= STAGE_BYTES {
            return Err(BusError::Overrun);
        }
        self.stage[self.len] = b;
        self.len += 1;
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<(), BusError> {
        self.open = false;
        self.i2c
            .write(self.address, &self.stage[..self.len])
            .map_err(map_i2c_error)
    }

    fn read_byte(&mut self, address: u8) -> Result<u8, BusError> {
        // Select the data register, then clock one byte back. Note that not
        // every breakout wires the readback path; those report Nack here.
        let mut byte = [0u8; 1];
        self.i2c
            .write_read(address, &[DATA_MODE], &mut byte)
            .map_err(map_i2c_error)?;
        Ok(byte[0])
    }
}
