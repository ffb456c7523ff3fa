pub mod record_heartbeat;

pub use record_heartbeat::RecordHeartbeatUseCase;
