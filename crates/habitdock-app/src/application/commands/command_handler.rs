use async_trait::async_trait;
use habitdock_domain::session::Session;
use habitdock_domain::shared::DomainError;

/// Command trait - marker trait for all commands
pub trait Command: Send + Sync {}

/// Command handler trait
///
/// The caller's session is passed alongside every command; handlers check
/// ownership against it before touching user data.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    type Result;

    async fn handle(&self, session: &Session, command: C) -> Result<Self::Result, DomainError>;
}
