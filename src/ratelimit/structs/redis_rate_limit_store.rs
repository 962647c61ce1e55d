use redis::aio::MultiplexedConnection;

pub struct RedisRateLimitStore {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) key_prefix: String,
    pub(crate) script: redis::Script,
}
