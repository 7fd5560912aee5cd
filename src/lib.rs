//! Bounded recency-ordered buffer of recently evaluated feature flags.
//!
//! Keeps the most recently touched unique flags, up to a fixed capacity.
//! Re-evaluating a flag moves it to most-recent with its new value; a new
//! flag on a full buffer evicts the longest-untouched one.
//!
//! ```rust
//! use flagbuf::FlagsContext;
//!
//! let mut ctx = FlagsContext::with_capacity(2);
//! ctx.set_flag("dark-mode", true)?;
//! ctx.set_flag("new-checkout", false)?;
//! ctx.set_flag("dark-mode", false)?; // moved to most-recent
//!
//! let names: Vec<_> = ctx.flags().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["new-checkout", "dark-mode"]);
//! # Ok::<(), flagbuf::Error>(())
//! ```

pub mod buffer;
pub mod context;
pub mod error;

pub use buffer::{DEFAULT_MAX_SIZE, FlagBuffer, FlagRecord, insert, insert_bounded};
pub use context::FlagsContext;
pub use error::{Error, Result};
