//! Data models for extracted contact information.

pub mod contact;
