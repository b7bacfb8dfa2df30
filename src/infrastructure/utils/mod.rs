pub mod get_client_ip;
pub mod image;
pub mod valid_uuid;
