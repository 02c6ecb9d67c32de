pub mod alphabet;
pub mod decode;
pub mod decode_int;
pub mod encode;
pub mod encode_int;
pub mod width;
