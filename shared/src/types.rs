use serde::{Deserialize, Deserializer, Serialize};

/// Connection id reported when a sniffed endpoint is missing from the host index.
pub const UNRESOLVED_CONNECTION_ID: i64 = 99999;

/// Reads `null` as the field's zero value instead of rejecting the record.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One query observed on the wire by the sniffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SniffRecord {
    #[serde(rename = "cip", deserialize_with = "null_as_default")]
    pub client_ip: String,
    #[serde(rename = "cport", deserialize_with = "null_as_default")]
    pub client_port: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub db: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sql: String,
    /// Elapsed time, copied through untouched.
    #[serde(rename = "cus", deserialize_with = "null_as_default")]
    pub elapsed: i64,
}

impl SniffRecord {
    /// Join key against the host index: `ip:port`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.client_ip, self.client_port)
    }
}

/// Identity of a known connection, captured separately from the sniff log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInfoRecord {
    #[serde(rename = "host", deserialize_with = "null_as_default")]
    pub endpoint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub db: String,
}

impl HostInfoRecord {
    pub fn unresolved() -> Self {
        Self {
            id: UNRESOLVED_CONNECTION_ID,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub connection_id: String,
    pub query_time: i64,
    pub sql: String,
    pub rows_sent: i64,
    pub username: String,
    pub dbname: String,
    pub sql_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_format() {
        let record = SniffRecord {
            client_ip: "10.0.0.1".to_string(),
            client_port: 3306,
            ..SniffRecord::default()
        };
        assert_eq!(record.endpoint(), "10.0.0.1:3306");
        assert_eq!(SniffRecord::default().endpoint(), ":0");
    }

    #[test]
    fn test_sniff_record_wire_names() {
        let line = r#"{"cip":"10.0.0.2","cport":4000,"user":"bob","db":"app","sql":"select 1","cus":42}"#;
        let record: SniffRecord = serde_json::from_str(line).unwrap();

        assert_eq!(record.client_ip, "10.0.0.2");
        assert_eq!(record.client_port, 4000);
        assert_eq!(record.user, "bob");
        assert_eq!(record.db, "app");
        assert_eq!(record.sql, "select 1");
        assert_eq!(record.elapsed, 42);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let record: HostInfoRecord = serde_json::from_str(r#"{"host":"1.2.3.4:5"}"#).unwrap();
        assert_eq!(record.endpoint, "1.2.3.4:5");
        assert_eq!(record.id, 0);
        assert!(record.user.is_empty());
        assert!(record.db.is_empty());
    }

    #[test]
    fn test_null_fields_read_as_zero() {
        let record: SniffRecord = serde_json::from_str(
            r#"{"cip":"10.0.0.1","cport":3306,"user":null,"db":null,"sql":"select 1","cus":12}"#,
        )
        .unwrap();
        assert_eq!(record.client_ip, "10.0.0.1");
        assert_eq!(record.client_port, 3306);
        assert!(record.user.is_empty());
        assert!(record.db.is_empty());
        assert_eq!(record.sql, "select 1");
        assert_eq!(record.elapsed, 12);

        let host: HostInfoRecord =
            serde_json::from_str(r#"{"host":"10.0.0.1:3306","id":null,"user":"alice","db":null}"#)
                .unwrap();
        assert_eq!(host.endpoint, "10.0.0.1:3306");
        assert_eq!(host.id, 0);
        assert_eq!(host.user, "alice");
        assert!(host.db.is_empty());
    }

    #[test]
    fn test_output_field_order() {
        let out = OutputRecord {
            connection_id: "7".to_string(),
            query_time: 12,
            sql: "select 1".to_string(),
            rows_sent: 0,
            username: "alice".to_string(),
            dbname: "shop".to_string(),
            sql_type: "select".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"connection_id":"7","query_time":12,"sql":"select 1","rows_sent":0,"username":"alice","dbname":"shop","sql_type":"select"}"#
        );
    }
}
