pub mod db;
pub mod fs;
