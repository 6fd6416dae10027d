pub mod attachment;
pub mod channel;
