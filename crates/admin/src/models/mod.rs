//! Domain models for the admin app.

pub mod shipping_method;

pub use shipping_method::ShippingMethod;
