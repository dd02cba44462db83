// Reusable library API: the CLI and the local tools build on it
pub mod cover;
pub mod cover_char;
pub mod dictionary;
pub mod enumerator;
pub mod errors;
mod inventory;
pub mod log;
pub mod phrase;
pub mod phrase_index;
pub mod placement;
pub mod placer;
pub mod prompt;
pub mod render;

pub use cover::{find_combinations, CoverSearch};
pub use enumerator::{Combination, SearchParams};
pub use errors::CoverError;
