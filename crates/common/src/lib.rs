pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_serializes_as_single_field() {
        let m = types::Message::new("Contact has been deleted");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Contact has been deleted"}));
    }
}
