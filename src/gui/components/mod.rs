// src/gui/components/mod.rs
pub mod amount_panel;
pub mod data_table;
pub mod document_bar;
pub mod export_bar;
