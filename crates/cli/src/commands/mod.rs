pub(crate) mod init_db;
pub(crate) mod serve;
