//! Menu construction, state sync, command dispatch and the window event
//! loop, written against the [`toolkit::Toolkit`] and [`host`] traits.

pub mod bindings;
pub mod commands;
pub mod common;
pub mod event_loop;
pub mod headless;
pub mod host;
pub mod menu;
pub mod merge;
pub mod model;
pub mod registry;
pub mod sync;
pub mod template;
pub mod toolkit;
