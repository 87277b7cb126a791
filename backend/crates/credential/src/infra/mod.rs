//! Infrastructure Layer
//!
//! Stand-ins for the external collaborators of the form.

pub mod analytics;
pub mod mock_gateway;
