pub mod fixture_json;
pub mod standings_json;

pub use fixture_json::{
    apply_edit_json, build_playoff_json, generate_schedule_json, ApplyEditRequest,
    ApplyEditResponse, BuildPlayoffRequest, BuildPlayoffResponse, GenerateScheduleRequest,
    GenerateScheduleResponse,
};
pub use standings_json::{compute_standings_json, StandingsRequest, StandingsResponse};
