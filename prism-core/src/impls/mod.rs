// Definition for `core::` types
mod core;

// Definition for `alloc::` types
mod alloc;

// Definition for `std::` types (that aren't in `alloc` or `core`)
mod std;

// Definition for third-party crates
mod crates;
