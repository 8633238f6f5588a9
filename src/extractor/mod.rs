// src/extractor/mod.rs

pub mod bypass;
pub mod decode;
pub mod listing;
pub mod mapper;
pub mod search;
