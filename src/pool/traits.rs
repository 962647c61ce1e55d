pub mod connection_factory;
