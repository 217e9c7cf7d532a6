mod test_utils;

mod health_test;
mod register_test;
