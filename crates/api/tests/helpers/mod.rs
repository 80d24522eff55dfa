#![allow(dead_code)]

pub mod stubs;

pub use stubs::*;
