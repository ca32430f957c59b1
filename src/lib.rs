// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` shows stacked, auto-dismissing toast notifications.
//!
//! The [`toast`] module holds the toolkit-independent core: a bounded visible
//! set, a FIFO pending queue and per-toast auto-dismiss timers. The [`ui`]
//! module renders that state with the Iced GUI framework.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
pub mod ui;

pub use error::{Error, Result};
pub use toast::{Manager, ToastId, ToastRequest};
