//! Music Buff - Voice assistant skill for music artists
//!
//! This crate answers spoken questions about music artists: it maps an
//! inbound host request to an intent, normalizes the artist name into a page
//! title, fetches a summary from the encyclopedia API and composes the
//! spoken reply.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
