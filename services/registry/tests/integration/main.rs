mod helpers;

mod cascade_test;
mod cost_test;
mod record_test;
