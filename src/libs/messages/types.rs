#[derive(Debug, Clone)]
pub enum Message {
    // === SERVER MESSAGES ===
    ServerStarting(String),  // version
    ServerListening(String), // address
    ServerRoute(String, String), // method, path
    ServerStopped,
    ShutdownSignalReceived,
    ShutdownSignalFailed(String), // error

    // === DATABASE MESSAGES ===
    DatabaseOpened(String, usize), // path, pool size
    DatabaseInMemory,
    DatabasePathEmpty,

    // === TEMPLATE MESSAGES ===
    TemplatesLoaded(String, usize), // directory, count
    TemplatesBuiltin,

    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64, usize), // id, affected rows
    TaskTextRequired,
    InvalidTaskId(String),

    // === REQUEST MESSAGES ===
    RequestRejected(u16, String), // status, reason
    RequestFailed(u16, String),   // status, reason
    FormBodyIgnored(String),      // rejection

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String),            // path
    ConfigDefaults,
    ConfigSaved(String),             // path
    ConfigExists(String),            // path
    ConfigDeleted(String),           // path
    ConfigInvalidValue(String, String), // key, value
    ConfigPoolSizeZero,
}
