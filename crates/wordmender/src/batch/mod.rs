//! # Token Batches
//!
//! The numeric input side of the decoder: [`TokenBatch`] and its
//! [`DType`] / [`Device`] tags.
//!
//! ## Example
//!
//! ```rust
//! use wordmender::batch::{DType, Device, TokenBatch};
//!
//! let batch = TokenBatch::from_rows(&[vec![5i64, 9], vec![9, 5]])
//!     .unwrap()
//!     .with_device(Device::Accelerator { ordinal: 0 });
//!
//! assert_eq!(batch.shape(), &[2, 2]);
//! assert_eq!(batch.dtype(), DType::I64);
//! assert!(batch.to_host().device().is_host());
//! ```

pub mod device;
pub mod dtype;
pub mod token_batch;

#[doc(inline)]
pub use device::Device;
#[doc(inline)]
pub use dtype::DType;
#[doc(inline)]
pub use token_batch::{BatchStorage, TokenBatch};
