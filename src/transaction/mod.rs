pub mod abi;
pub mod eip712;

pub use abi::{decode_address, decode_uint, encode_call, selector_of};
pub use eip712::{Eip712Transaction, PaymasterParams};
