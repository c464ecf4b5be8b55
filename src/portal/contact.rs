//! Contact form submission.

use super::PortalContext;
use crate::models::ContactMessage;

/// Shown when the gateway accepts a message without saying anything.
pub const CONTACT_SENT: &str = "Message sent successfully!";

#[derive(Clone)]
pub struct ContactWorkflow {
    ctx: PortalContext,
}

impl ContactWorkflow {
    pub fn new(ctx: PortalContext) -> Self {
        Self { ctx }
    }

    /// Send the message; returns whether the gateway accepted it.
    pub async fn submit(&self, message: ContactMessage) -> bool {
        self.ctx
            .document
            .lock()
            .await
            .fill_contact_form(message.clone());

        match self.ctx.gateway.contact(&message).await {
            Ok(ack) => {
                let mut doc = self.ctx.document.lock().await;
                if ack.message.is_empty() {
                    doc.alert(CONTACT_SENT);
                } else {
                    doc.alert(ack.message);
                }
                doc.reset_contact_form();
                true
            }
            Err(e) => {
                tracing::error!("Error sending contact message: {}", e);
                self.ctx
                    .document
                    .lock()
                    .await
                    .alert(format!("Error sending message: {}", e.message()));
                false
            }
        }
    }
}
