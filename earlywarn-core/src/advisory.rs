//! Advisory Generator
//!
//! Fixed per-hazard tip table with an urgency marker decided by severity.

use crate::hazard::Hazard;
use crate::severity::Severity;

/// Prefix for HIGH/EXTREME severity on a real hazard.
pub const WARNING_MARKER: &str = "⚠️ ";
/// Prefix for everything else.
pub const SAFE_MARKER: &str = "✅ ";

/// The recommendation text for a hazard, without urgency marker.
pub fn tip(hazard: Hazard) -> &'static str {
    match hazard {
        Hazard::Flood => "Move to higher ground; avoid rivers & low bridges.",
        Hazard::Earthquake => "Drop, Cover & Hold On; stay away from glass and power lines.",
        Hazard::Landslide => "Avoid steep slopes; watch for cracks and unusual water flow.",
        Hazard::Cyclone => "Stay indoors; secure windows; keep emergency kit ready.",
        Hazard::Wildfire => "Avoid dry forests; prepare to evacuate; keep water ready.",
        Hazard::Drought => "Conserve water; avoid open flames; stay hydrated.",
        Hazard::Normal => "No immediate threat. Stay alert and informed.",
    }
}

/// Build the urgency-flagged recommendation string.
///
/// The warning marker applies only when severity is HIGH or EXTREME and the
/// hazard is real; a severe probability over a "Normal" reading still reads
/// as informational.
pub fn advise(hazard: Hazard, severity: Severity) -> String {
    let marker = if severity >= Severity::High && hazard != Hazard::Normal {
        WARNING_MARKER
    } else {
        SAFE_MARKER
    };
    format!("{}{}", marker, tip(hazard))
}

// ============================================================================
// TESTS
// ============================================================================
