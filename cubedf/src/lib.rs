// src/lib.rs
pub mod data {
    pub mod source;
    pub mod output;
}

pub mod sim {
    pub mod generator;
}

pub mod config;
pub mod histogram;
pub mod logging;
pub mod run;
