//! HTTP front end for the optica calculator.
//!
//! [`calculate`] is the whole request pipeline as a pure function:
//! a [`Request`] goes in, a [`Response`] comes out, and the diagram is
//! produced by whatever [`Renderer`](optica_diagram::Renderer) is supplied.
//! [`run_server`] exposes it as `POST /calculate` next to the static front end.

mod config;
mod pipeline;
mod render;
mod server;
mod wire;

pub use config::ServerConfig;
pub use pipeline::{calculate, calculate_with};
pub use render::JsonRenderer;
pub use server::{ServerError, routes, run_server};
pub use wire::{Request, Response};
