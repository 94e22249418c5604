mod signals;
mod sources;
mod tracing;

pub use self::signals::spawn_signal_task;
pub use self::sources::github_release_source;
pub use self::tracing::init as init_tracing;
