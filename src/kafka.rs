//! Consumer-group reader that reports how far behind a topic it is.
//!
//! Lag is measured per message as the time between the message's broker
//! timestamp and the moment it is read.

use chrono::{DateTime, Utc};
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{BaseConsumer, Consumer};
use rdkafka::error::KafkaResult;
use rdkafka::message::Timestamp;

/// Consumer group joined when none is given.
pub const DEFAULT_GROUP: &str = "sillytools_kafka_consumer";

const FETCH_MIN_BYTES: &str = "10000";
const FETCH_MAX_BYTES: &str = "10000000";

/// Client settings for a group consumer that starts at the earliest offset
/// when the group has none committed.
pub fn consumer_config(brokers: &[String], group: &str) -> ClientConfig {
    let mut config = ClientConfig::new();
    config
        .set("bootstrap.servers", brokers.join(","))
        .set("group.id", group)
        .set("auto.offset.reset", "earliest")
        .set("fetch.min.bytes", FETCH_MIN_BYTES)
        .set("fetch.max.bytes", FETCH_MAX_BYTES);
    config
}

/// Create a consumer in `group` subscribed to `topic`.
pub fn subscribe(brokers: &[String], group: &str, topic: &str) -> KafkaResult<BaseConsumer> {
    let consumer: BaseConsumer = consumer_config(brokers, group).create()?;
    consumer.subscribe(&[topic])?;
    Ok(consumer)
}

/// Seconds between the message timestamp and `now`.
///
/// `None` when the message carries no timestamp.
pub fn lag_seconds(now: DateTime<Utc>, timestamp: Timestamp) -> Option<f64> {
    let produced = DateTime::from_timestamp_millis(timestamp.to_millis()?)?;
    let micros = (now - produced).num_microseconds()?;
    Some(micros as f64 / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_010_250).unwrap()
    }

    #[test]
    fn test_lag_from_create_time() {
        let lag = lag_seconds(now(), Timestamp::CreateTime(1_700_000_000_000));
        assert_eq!(lag, Some(10.25));
    }

    #[test]
    fn test_lag_from_log_append_time() {
        let lag = lag_seconds(now(), Timestamp::LogAppendTime(1_700_000_010_000));
        assert_eq!(lag, Some(0.25));
    }

    #[test]
    fn test_lag_negative_when_clock_behind() {
        let lag = lag_seconds(now(), Timestamp::CreateTime(1_700_000_011_250));
        assert_eq!(lag, Some(-1.0));
    }

    #[test]
    fn test_lag_without_timestamp() {
        assert_eq!(lag_seconds(now(), Timestamp::NotAvailable), None);
    }

    #[test]
    fn test_consumer_config() {
        let brokers = vec!["10.0.0.1:9092".to_string(), "10.0.0.2:9092".to_string()];
        let config = consumer_config(&brokers, DEFAULT_GROUP);
        assert_eq!(
            config.get("bootstrap.servers"),
            Some("10.0.0.1:9092,10.0.0.2:9092")
        );
        assert_eq!(config.get("group.id"), Some("sillytools_kafka_consumer"));
        assert_eq!(config.get("auto.offset.reset"), Some("earliest"));
    }
}
