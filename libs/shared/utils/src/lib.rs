pub mod test_utils;
pub mod time;
