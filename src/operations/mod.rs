mod extract_outline;
mod offset_path;
mod profiles;

pub use extract_outline::ExtractOutline;
pub use offset_path::OffsetPath;
pub use profiles::{BoardProfiles, Profiles, DEFAULT_BOARD_INSET};
