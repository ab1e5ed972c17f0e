//! Agentdeck Editor
//!
//! This crate implements the interaction side of the workflow canvas. The
//! rendering layer forwards user gestures here; every gesture becomes a
//! synchronous call on [`Editor`] that mutates the [`GraphStore`] and emits an
//! [`EditorEvent`].
//!
//! # Gestures
//!
//! - palette drop: [`Editor::on_drop`] decodes the [`DragPayload`] and appends a node
//! - connect: [`Editor::on_connect`] appends an animated edge
//! - node click: [`Editor::select_node`] drives the inspector
//! - inspector edit: [`Editor::set_field`] replaces the selected node's attributes
//! - framework pick: [`Editor::select_framework`] stores the tag
//! - export: [`Editor::export`] snapshots the workflow
//!
//! Scripts of [`EditorAction`]s can be replayed with [`Editor::apply`].
//!
//! [`GraphStore`]: agentdeck_graph::GraphStore
//! [`DragPayload`]: agentdeck_config::DragPayload

mod action;
mod canvas;
mod clock;
mod config;
mod editor;
mod error;
mod events;
mod export;
mod framework;
mod inspector;
mod palette;
mod seed;

pub use action::EditorAction;
pub use canvas::{CanvasBounds, DropEvent, Viewport};
pub use clock::{Clock, SystemClock};
pub use config::EditorConfig;
pub use editor::Editor;
pub use error::EditorError;
pub use events::{ChannelNotifier, EditorEvent, EditorNotifier, NoopNotifier};
pub use export::ExportedWorkflow;
pub use framework::{FRAMEWORKS, Framework, FrameworkPicker};
pub use inspector::{DEFAULT_MODEL, InspectorField, InspectorView, MODEL_OPTIONS};
pub use palette::{PALETTE, PaletteItem};
