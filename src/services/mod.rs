pub mod checkout;
pub mod relay;
