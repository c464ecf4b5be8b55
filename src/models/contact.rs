//! Contact form message and acknowledgement.

use serde::{Deserialize, Serialize};

/// Message sent from the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Gateway acknowledgement of a contact message.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContactAck {
    #[serde(default)]
    pub message: String,
}
