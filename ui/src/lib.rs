//! Shared UI crate for PancreaScan-AI. Localization, the simulation stub and all views live here.

pub mod components;
pub mod core;
pub mod demo;
pub mod i18n;
pub mod views;

#[cfg(test)]
mod tests;
