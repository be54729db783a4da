//! Ask/tell oracle adapters.
//!
//! Some optimizers (CMA-ES and other distribution-based strategies) do not
//! fit the selection/variation model: they propose a batch of candidates
//! and then learn from the batch's fitnesses. [`Generate`] and [`Update`]
//! let such an optimizer drive a pipeline:
//!
//! ```text
//! Generate(oracle) -> Evaluate -> Update(oracle)
//! ```
//!
//! Both ends share the oracle through a [`SharedOracle`]. The pipeline is
//! single-threaded, so an `Rc<RefCell<_>>` is enough.

mod ops;
mod types;

pub use ops::{Generate, Update};
pub use types::{AskTellOracle, SharedOracle};
