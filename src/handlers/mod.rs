// src/handlers/mod.rs

pub mod import;
