mod poller;
mod refresher;

pub use self::poller::Poller;
pub use self::refresher::Refresher;
