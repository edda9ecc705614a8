//! Hotel documents as returned by the search service, and the display
//! records derived from them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Shown in place of room details for hotels indexed without any.
pub const NO_ROOM_DATA: &str = "No room data provided";

/// A room belonging to a hotel document.
///
/// Field names follow the index schema, hence the PascalCase renames.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Room {
    #[serde(rename = "BaseRate", default)]
    pub base_rate: f64,
    #[serde(rename = "BedOptions", default)]
    pub bed_options: String,
}

/// A raw hotel document from the search index, restricted to the fields the
/// front-end selects. Documents may carry zero rooms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Hotel {
    #[serde(rename = "HotelName", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
    #[serde(rename = "Rooms", default)]
    pub rooms: Vec<Room>,
}

/// Display-ready summary of one hotel, carrying a sample room.
///
/// Immutable once built: one per hit on the current page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HotelSummary {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// First room's base rate; 0 when the hotel has no room data
    pub sample_rate: f64,
    /// First room's bed options, or [`NO_ROOM_DATA`]
    pub sample_bed_options: String,
}

impl HotelSummary {
    /// Build the summary for one hit. The first room provides the sample
    /// rate and bed options; tags are copied in index order.
    pub fn from_hit(hit: &Hotel) -> Self {
        let (sample_rate, sample_bed_options) = match hit.rooms.first() {
            Some(room) => (room.base_rate, room.bed_options.clone()),
            None => (0.0, NO_ROOM_DATA.to_string()),
        };

        HotelSummary {
            name: hit.name.clone(),
            description: hit.description.clone(),
            tags: hit.tags.clone(),
            sample_rate,
            sample_bed_options,
        }
    }

    /// Single-string rendering used by the incremental "next page" surface:
    /// sample room line, description, and a Highlights line when the hotel
    /// has tags.
    pub fn render_summary(&self) -> String {
        let mut summary = format!(
            "Sample room: {} ${}\n{}",
            self.sample_bed_options, self.sample_rate, self.description
        );
        if !self.tags.is_empty() {
            summary.push_str("\nHighlights: ");
            summary.push_str(&self.tags.join(", "));
        }
        summary
    }
}

/// Map the hits in `[start, end)` to display records, in source order.
///
/// A range outside the supplied hits (a stale count against a shrunk result
/// set) is an error, never a silent truncation; callers recompute bounds
/// from the freshest count before slicing.
pub fn map_slice(hits: &[Hotel], start: usize, end: usize) -> AppResult<Vec<HotelSummary>> {
    if start > end || end > hits.len() {
        return Err(AppError::SliceOutOfRange {
            start,
            end,
            len: hits.len(),
        });
    }

    Ok(hits[start..end].iter().map(HotelSummary::from_hit).collect())
}
