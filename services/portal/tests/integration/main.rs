
mod content_test;
mod profile_test;
mod router_test;
mod session_test;
mod upload_test;
