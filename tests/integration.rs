// Integration tests module

mod integration {
    mod config_test;
    mod export_test;
    mod log_view_test;
}
