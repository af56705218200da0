//! Value records shared by every engine stage.

pub mod player;
pub mod presence;
pub mod round;
pub mod saved_match;
pub mod team;

pub use player::{BirthDay, Player, PlayerId, Position, MAX_SKILL_RATING, MIN_SKILL_RATING};
pub use presence::{Presence, PresenceCounts, PresenceStatus};
pub use round::{Attendance, AttendanceTag, Round};
pub use saved_match::{Goal, SavedMatch};
pub use team::{Placement, TeamAssignment, TeamSide, TeamSlot};
