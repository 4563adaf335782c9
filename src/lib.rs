/**
 * @file lib.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-11
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

pub mod cli;
pub mod driver;
pub mod error;

pub use driver::{run, Options, Summary};
pub use error::Error;
