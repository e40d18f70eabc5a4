pub mod monthly;
pub mod pairing;
