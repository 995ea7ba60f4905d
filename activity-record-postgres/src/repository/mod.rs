pub mod activity;
pub mod db_init;
