use chrono::Utc;

/// Generate a record id from the current epoch milliseconds plus a
/// random fraction in `[0, 1)`. Collisions are improbable, not
/// impossible.
pub fn generate_record_id() -> f64 {
    Utc::now().timestamp_millis() as f64 + rand::random::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_is_positive_and_recent() {
        let id = generate_record_id();
        // Well past 2020-01-01 in epoch milliseconds.
        assert!(id > 1_577_836_800_000.0);
    }

    #[test]
    fn record_ids_differ_across_calls() {
        assert_ne!(generate_record_id(), generate_record_id());
    }
}
