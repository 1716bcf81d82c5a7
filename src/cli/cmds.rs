pub mod cols;
pub mod init;
pub mod root;
pub mod table;
pub mod values;
