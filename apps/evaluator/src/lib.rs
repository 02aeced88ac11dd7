//! Client-side orchestration for the ATS resume evaluator: role/mode/file
//! selection, validation, multipart request building, single-flight
//! submission and result normalization.

pub mod config;
pub mod errors;
pub mod evaluation_client;
pub mod models;
pub mod selection;
pub mod submission;
