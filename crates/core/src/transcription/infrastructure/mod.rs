pub mod demo_backend;
