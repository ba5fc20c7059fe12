#[cfg(feature = "indexmap")]
mod indexmap;
