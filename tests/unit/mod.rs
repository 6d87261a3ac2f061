mod common;
mod test_error;
mod utils;
