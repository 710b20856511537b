pub mod authenticated_caller;
