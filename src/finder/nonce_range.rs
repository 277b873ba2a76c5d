use std::ops::RangeInclusive;

pub const DEFAULT_START_NONCE: u64 = 1;
pub const DEFAULT_END_NONCE: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Invalid nonce range: start {start} is after end {end}")]
pub struct NonceRangeError {
    pub start: u64,
    pub end: u64,
}

/// Inclusive range of deployer nonces to probe, scanned in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonceRange {
    start: u64,
    end: u64,
}

impl NonceRange {
    pub fn new(start: u64, end: u64) -> Result<Self, NonceRangeError> {
        if start > end {
            return Err(NonceRangeError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    // saturates at u64::MAX for the full 0..=u64::MAX span
    pub fn len(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

impl Default for NonceRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_NONCE,
            end: DEFAULT_END_NONCE,
        }
    }
}
