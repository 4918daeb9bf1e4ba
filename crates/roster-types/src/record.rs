use serde::{Deserialize, Serialize};

/// A single user entry in the store. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub email: String,
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_wire_order() {
        let record = Record {
            id: "1".to_string(),
            email: "a@x.com".to_string(),
            age: 30,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"1","email":"a@x.com","age":30}"#);
    }

    #[test]
    fn test_deserializes_any_field_order() {
        let record: Record =
            serde_json::from_str(r#"{"age":25,"id":"2","email":"b@x.com"}"#).unwrap();
        assert_eq!(
            record,
            Record {
                id: "2".to_string(),
                email: "b@x.com".to_string(),
                age: 25,
            }
        );
    }
}
