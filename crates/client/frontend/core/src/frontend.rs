//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

/// Frontend abstraction for UI layers.
///
/// A frontend owns its selection machine and roster for the whole session and
/// returns once the player quits.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait FrontendApp: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(self) -> Result<()>
    where
        Self: Sized;
}
