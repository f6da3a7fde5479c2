// SPDX-License-Identifier: MPL-2.0
pub mod trigger_area;

pub use trigger_area::{trigger_area, TriggerArea};
