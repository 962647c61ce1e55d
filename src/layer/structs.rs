pub mod performance_layer;
