#![allow(dead_code)]

pub mod cpan;

pub use cpan::*;
