mod appointment_test;
mod health_test;
mod middleware_test;
