//! Recording I2C bus for host tests.

use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

/// Records every write as `(address, bytes)`; reads return zeros.
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    /// When set, every transaction NACKs.
    pub fail: bool,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}
