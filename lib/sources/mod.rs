mod client;
mod source;

pub mod github;

#[cfg(test)]
pub(crate) mod testing;

pub use self::github::GithubProvider;
pub use self::source::ReleaseSource;
