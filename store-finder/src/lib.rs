//! Store finder server.
//!
//! A web application that answers: "Which of our stores are within this
//! many kilometres of my postcode?" Results run north to south.

pub mod catalog;
pub mod config;
pub mod distance;
pub mod domain;
pub mod geocode;
pub mod search;
pub mod web;
