pub mod artist;
pub mod dates;
pub mod ids;
pub mod platform;
pub mod release;
pub mod release_status;
pub mod stat_point;

pub use artist::Artist;
pub use ids::{ArtistId, ReleaseId};
pub use platform::{KNOWN_PLATFORMS, PlatformShare};
pub use release::Release;
pub use release_status::{ReleaseStatus, StatusParseError};
pub use stat_point::StatPoint;
