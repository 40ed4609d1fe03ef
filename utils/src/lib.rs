pub mod file_util;
pub mod test_utils;
