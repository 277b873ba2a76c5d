mod address_tests;
mod transaction_tests;
