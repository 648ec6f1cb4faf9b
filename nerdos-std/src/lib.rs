#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod fs;
pub mod io;
pub mod path;
pub mod power;
pub mod ramfs;
