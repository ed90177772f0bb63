pub mod constants;
pub mod server_info;
pub mod templates;
pub mod test_helpers;
