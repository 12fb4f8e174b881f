//! prepcalc Status Tool
//!
//! Provides runtime status information and usage notes for the service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::conversion::DEFAULT_DENSITY;
use crate::scaling::GST_RATE;

/// Usage notes for AI assistants driving the calculation tools
pub const CALCULATION_INSTRUCTIONS: &str = r#"
# prepcalc Calculation Instructions

All tools are stateless. Pass plain quantities, units and ingredient names;
nothing is stored between calls.

## Units

| Class  | Units                                           | Base |
|--------|-------------------------------------------------|------|
| Volume | ml, l, tsp, tbsp, fl oz, cups, pint, quart, gallon | ml |
| Weight | mg, g, kg, oz, lbs                              | g    |
| Count  | pieces, each, whole, slices                     | -    |

Spellings are normalized first: "Cup", "cup" and "cups" are the same unit,
as are "lb", "lbs" and "pounds". Use `normalize_unit` to check how a unit
will be read.

## Converting

- `convert_units` handles any pair. Volume <-> weight uses the ingredient's
  density; pass `ingredient` for an accurate answer.
- Unknown ingredients use a default density (see `prepcalc_status`), so a
  cross-class answer is always approximate unless `ingredient_density`
  reports `known: true`.
- Count units never convert to volume or weight.
- Results are rounded to 4 decimal places and carry the original value.

## Scaling

- `scale_quantity` / `scale_ingredients`: quantity x target / original servings.
- `adjust_recipe_proportions`: the user changed one ingredient; every other
  ingredient is scaled by the same factor. The changed ingredient keeps the
  exact value given.

## GST

- `gst_breakdown` splits one amount (say whether it already includes GST).
- `calculate_total_with_gst` totals stock items; each item may be inclusive
  or exclusive. Use `display` for showing money, `totals` for further maths.

## Percentages

`ingredient_percentage` never errors. A 0 means the share could not be
computed (count unit, unknown unit, or no total weight).
"#;

/// Runtime status of the prepcalc service
#[derive(Debug, Clone, Serialize)]
pub struct PrepcalcStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Engine constants
    pub gst_rate: f64,
    pub default_density_g_per_ml: f64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> PrepcalcStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        PrepcalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            gst_rate: GST_RATE,
            default_density_g_per_ml: DEFAULT_DENSITY,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
