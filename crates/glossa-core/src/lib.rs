pub mod dictionary;
pub mod error;
pub mod lookup;
pub mod preprocess;
pub mod similarity;
pub mod state;

pub use dictionary::Dictionary;
pub use error::LookupError;
pub use lookup::{LookupOptions, LookupResult, lookup, lookup_with, suggestions};
