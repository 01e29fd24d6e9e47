pub mod util_hex;
