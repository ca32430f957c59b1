// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Visible capacity and auto-dismiss duration
//! - **Tick**: Polling interval used to deliver timer expiries
//! - **Stacking**: Visual falloff applied to older toasts

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of toasts visible at once; further toasts are queued.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Minimum allowed visible capacity.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum allowed visible capacity.
pub const MAX_MAX_VISIBLE: usize = 10;

/// Default auto-dismiss duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 3000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval between timer ticks while any auto-dismiss timer is live.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Vertical offset between stacked toasts, per stack index (logical pixels).
pub const STACK_OFFSET_PX: f32 = 8.0;

/// Opacity removed per stack index.
pub const STACK_OPACITY_FALLOFF: f32 = 0.15;

/// Lowest opacity a stacked toast can reach.
pub const STACK_MIN_OPACITY: f32 = 0.4;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Queue validation
    assert!(MIN_MAX_VISIBLE > 0);
    assert!(MAX_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);
    assert!(DEFAULT_DURATION_MS > 0);

    // Tick validation
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < DEFAULT_DURATION_MS);

    // Stacking validation
    assert!(STACK_OFFSET_PX >= 0.0);
    assert!(STACK_OPACITY_FALLOFF > 0.0 && STACK_OPACITY_FALLOFF < 1.0);
    assert!(STACK_MIN_OPACITY > 0.0 && STACK_MIN_OPACITY <= 1.0);
};
