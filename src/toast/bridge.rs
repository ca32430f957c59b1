// SPDX-License-Identifier: MPL-2.0
//! Boundary between the queue manager and whatever draws the toasts.
//!
//! Outbound, the manager pushes the ordered visible set to a [`RenderBridge`]
//! after every committed change. Inbound, presentation code reports
//! gesture or close-button dismissals through
//! [`Manager::request_dismiss`](super::Manager::request_dismiss).

use super::entry::ToastDescriptor;

/// Receives the visible set whenever it changes.
///
/// The slice is ordered front to back: index 0 is the newest toast and
/// `stack_index` always equals the slice position. The bridge is called once
/// per public operation, after any promotion it caused, so it never observes
/// a free slot while toasts are still pending.
pub trait RenderBridge {
    fn visible_set_changed(&mut self, toasts: &[ToastDescriptor]);
}

impl<F> RenderBridge for F
where
    F: FnMut(&[ToastDescriptor]),
{
    fn visible_set_changed(&mut self, toasts: &[ToastDescriptor]) {
        self(toasts);
    }
}
