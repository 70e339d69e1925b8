//! Trait describing a runnable battle-screen host adapter.
use anyhow::Result;
use async_trait::async_trait;

/// Host adapter driving a [`crate::BattleScreen`].
///
/// An adapter owns its screen and feeds it pushes and gestures from whatever
/// transport the host uses, one event at a time.
///
/// # Implementations
///
/// - `CliFrontend`: line-oriented stdin/stdout adapter
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::{BattleScreen, DetachedBridge, Frontend, FrontendConfig, NullRenderer};
///
/// struct Replay {
///     screen: BattleScreen<DetachedBridge, NullRenderer>,
///     pushes: Vec<String>,
/// }
///
/// #[async_trait]
/// impl Frontend for Replay {
///     async fn run(&mut self) -> Result<()> {
///         for push in self.pushes.drain(..) {
///             self.screen.push_json(&push)?;
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Runs the adapter event loop until the host ends the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the host transport fails.
    async fn run(&mut self) -> Result<()>;
}
