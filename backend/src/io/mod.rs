//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain.
//!
//! Handlers translate JSON requests into domain calls and domain results
//! (including errors) into status codes and JSON bodies. No business rules
//! live here.
//!
//! ## Supported Operations
//!
//! - **GET /teachers**: the whole collection
//! - **GET /teachers/:id**: one record
//! - **POST /teachers**: create, server assigns the ID
//! - **PUT /teachers/:id**: full replacement of the mutable fields
//! - **DELETE /teachers/:id**: remove
//! - **POST /logs**: log lines shipped by the browser client

pub mod rest;

pub use rest::*;
