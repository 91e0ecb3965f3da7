#![deny(missing_docs)]
#![doc = "Shared error surface and deterministic RNG policy for the gridlane workspace."]

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, GridlaneError};
pub use rng::{derive_substream_seed, RngHandle};
