//! Services composing the external collaborators.

mod email;

pub use email::{DeliveryError, EmailRenderer, EmailTransport, send_confirmation};
