// SPDX-License-Identifier: MPL-2.0
//! Toast queue and lifecycle core.
//!
//! This module is independent of how toasts are drawn. It decides which
//! toasts are on screen, which wait, and when each one goes away.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` and its vocabulary (kind, position, duration)
//! - [`entry`] - Identifiers, admitted entries and render descriptors
//! - [`timer`] - Clock abstraction and the per-toast `TimerRegistry`
//! - [`manager`] - `Manager` for queuing, promotion and dismissal
//! - [`bridge`] - `RenderBridge` contract with the presentation layer
//!
//! # Usage
//!
//! ```
//! use iced_toasts::toast::{Manager, ToastRequest, ToastPosition};
//!
//! let mut manager = Manager::new();
//!
//! let id = manager
//!     .show(ToastRequest::success("Image saved").position(ToastPosition::Bottom))
//!     .expect("message is not empty");
//!
//! // Later, from a close button or swipe gesture:
//! manager.request_dismiss(id);
//! assert!(!manager.has_toasts());
//! ```
//!
//! # Lifecycle
//!
//! Each toast moves `Pending -> Visible -> Dismissed`, or straight from
//! `Pending` to `Dismissed` when cleared while queued. Newly visible toasts
//! (fresh or promoted) are inserted at the front, so stack index 0 is always
//! the most recent one.

pub mod bridge;
pub mod entry;
pub mod manager;
pub mod request;
pub mod timer;

pub use bridge::RenderBridge;
pub use entry::{ToastDescriptor, ToastEntry, ToastId, ToastPhase};
pub use manager::{Manager, Message};
pub use request::{Icon, StyleOverrides, ToastDuration, ToastKind, ToastPosition, ToastRequest};
pub use timer::{Clock, ManualClock, SystemClock, TimerRegistry};
