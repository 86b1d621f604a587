// src/handlers/mod.rs

pub mod questions;
