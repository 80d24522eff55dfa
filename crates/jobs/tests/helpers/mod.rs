#![allow(dead_code)]

pub mod counting_cache;

pub use counting_cache::CountingCache;
