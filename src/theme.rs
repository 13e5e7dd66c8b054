//! Theme module for score-tui
//!
//! Centralized colors for the score panel. The header
//! blues follow the course site's panel palette.

use ratatui::style::Color;

// ============================================================================
// Panel Colors
// ============================================================================

/// Panel background (#12161c)
pub const BG_PANEL: Color = Color::Rgb(18, 22, 28);

/// Section header row background (#1a1f26)
pub const BG_SECTION: Color = Color::Rgb(26, 31, 38);

/// Header bar - sky blue (#87ceeb)
pub const HEADER_BLUE: Color = Color::Rgb(135, 206, 235);

/// Toggle control - light blue (#aed6f1)
pub const TOGGLE_BLUE: Color = Color::Rgb(174, 214, 241);

/// Panel border (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Status Colors
// ============================================================================

/// Scored entries (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Refresh in progress (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
