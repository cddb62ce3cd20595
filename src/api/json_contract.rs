use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{SlideCounts, SlideLayout};
use crate::error::{SliderError, SliderResult};
use crate::interaction::CursorStyle;

use super::SliderSnapshot;

pub const SLIDER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope used by traces and fixtures:
/// `{ "schema_version": 1, "snapshot": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SliderSnapshot,
}

impl SliderSnapshotJsonContractV1 {
    #[must_use]
    pub fn new(snapshot: SliderSnapshot) -> Self {
        Self {
            schema_version: SLIDER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot,
        }
    }

    /// Unwraps the snapshot after checking the schema version and the slider
    /// invariants it records.
    pub fn into_snapshot(self) -> SliderResult<SliderSnapshot> {
        if self.schema_version != SLIDER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SliderError::InvalidData(format!(
                "slider snapshot schema {} is not supported (expected {})",
                self.schema_version, SLIDER_SNAPSHOT_JSON_SCHEMA_V1
            )));
        }
        self.snapshot.check_consistency()?;
        Ok(self.snapshot)
    }
}

impl SliderSnapshot {
    /// Checks that the recorded values could have come from a live engine.
    ///
    /// Inert snapshots report an empty slider. Active ones must agree with
    /// the layout math for their counts: `max_index`, `dot_count` and
    /// `active_dot` are derived, and `current_index <= max_index`.
    pub fn check_consistency(&self) -> SliderResult<()> {
        let fail = |what: String| {
            Err(SliderError::InvalidData(format!(
                "inconsistent slider snapshot: {what}"
            )))
        };

        if self.inert {
            if self.total_slides != 0 || self.current_index != 0 || self.autoplay_armed {
                return fail("inert snapshot reports live state".to_owned());
            }
            return Ok(());
        }

        if self.total_slides == 0 {
            return fail("active snapshot has no slides".to_owned());
        }
        if self.slides_to_show == 0 || self.slides_to_scroll == 0 {
            return fail(format!(
                "counts {}/{} must be >= 1",
                self.slides_to_show, self.slides_to_scroll
            ));
        }

        let counts = SlideCounts::new(self.slides_to_show, self.slides_to_scroll);
        let layout = SlideLayout::new(counts);
        let max_index = layout.max_index(self.total_slides);
        if self.max_index != max_index {
            return fail(format!("max_index {} != {max_index}", self.max_index));
        }
        if self.current_index > max_index {
            return fail(format!(
                "current_index {} past max_index {max_index}",
                self.current_index
            ));
        }
        let dot_count = layout.dot_count(self.total_slides);
        if self.dot_count != dot_count {
            return fail(format!("dot_count {} != {dot_count}", self.dot_count));
        }
        let active_dot = layout.active_dot(self.current_index);
        if self.active_dot != active_dot {
            return fail(format!("active_dot {} != {active_dot}", self.active_dot));
        }
        if self.dragging && self.cursor != CursorStyle::Grabbing {
            return fail("drag in progress without grabbing cursor".to_owned());
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SliderError::InvalidData(format!("slider snapshot json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(&SliderSnapshotJsonContractV1::new(self.clone()))
            .map_err(|e| SliderError::InvalidData(format!("slider snapshot contract v1 json: {e}")))
    }

    /// Reads either a versioned envelope or a bare snapshot.
    ///
    /// The envelope is recognized by its `schema_version` key, so a
    /// malformed envelope reports the envelope error rather than falling
    /// back to the bare form. Both forms are checked for consistency.
    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("slider snapshot json: {e}")))?;

        if value.get("schema_version").is_some() {
            let contract: SliderSnapshotJsonContractV1 = serde_json::from_value(value)
                .map_err(|e| SliderError::InvalidData(format!("slider snapshot contract: {e}")))?;
            return contract.into_snapshot();
        }

        let snapshot: Self = serde_json::from_value(value)
            .map_err(|e| SliderError::InvalidData(format!("slider snapshot json: {e}")))?;
        snapshot.check_consistency()?;
        Ok(snapshot)
    }
}
