mod release_cache;

pub use release_cache::{RefreshTicket, ReleaseCache};
