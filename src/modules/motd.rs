//! Message-of-the-day module: announces a banner during `Setup` and sits out
//! every other phase.

use async_trait::async_trait;
use tracing::info;

use crate::engine::module::{Capability, InvokeResult, Module};
use crate::engine::phase::{PhaseId, SETUP};

pub struct Motd {
    message: String,
    announced: bool,
}

impl Motd {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            announced: false,
        }
    }

    pub fn announced(&self) -> bool {
        self.announced
    }
}

#[async_trait]
impl Module for Motd {
    fn capability(&self, phase: &PhaseId) -> Capability {
        if *phase == SETUP {
            Capability::Supported
        } else {
            Capability::Unsupported
        }
    }

    async fn invoke(&mut self, phase: &PhaseId) -> InvokeResult {
        if *phase != SETUP {
            return Err(format!("motd has no '{phase}' hook").into());
        }
        info!(message = %self.message, "Message of the day");
        self.announced = true;
        Ok(Some(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::phase::START;

    #[tokio::test]
    async fn announces_once_during_setup() {
        let mut motd = Motd::new("welcome aboard");
        assert!(!motd.announced());
        let detail = motd.invoke(&SETUP).await.expect("setup succeeds");
        assert_eq!(detail.as_deref(), Some("welcome aboard"));
        assert!(motd.announced());
    }

    #[test]
    fn start_is_not_a_capability() {
        let motd = Motd::new("hi");
        assert_eq!(motd.capability(&START), Capability::Unsupported);
        assert_eq!(motd.capability(&SETUP), Capability::Supported);
    }
}
