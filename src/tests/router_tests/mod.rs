mod admin_tests;
mod api_tests;
mod auth_flow_tests;
mod auth_tests;
mod favorites_tests;
mod storefront_tests;
