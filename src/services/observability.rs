pub mod composed_logger;
