//! Shared wire types and process utilities used by the service and server crates.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_is_ok() {
        let h = types::Health::new(1.5);
        assert_eq!(h.status, "OK");
        assert_eq!(h.uptime, 1.5);
    }

    #[test]
    fn message_serializes_to_single_field() {
        let m = types::Message::new("User not found");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"message": "User not found"}));
    }
}
