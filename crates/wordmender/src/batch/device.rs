//! # Batch Residency

use core::fmt;

/// Where the storage of a [`super::TokenBatch`] resides.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    /// Ordinary addressable host memory.
    #[default]
    Cpu,

    /// Accelerator memory; must be relocated to the host before reading.
    Accelerator {
        /// The accelerator ordinal.
        ordinal: usize,
    },
}

impl Device {
    /// Can the batch be read in place?
    pub fn is_host(&self) -> bool {
        matches!(self, Self::Cpu)
    }
}

impl fmt::Display for Device {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "cpu"),
            Self::Accelerator { ordinal } => write!(f, "accelerator:{ordinal}"),
        }
    }
}
