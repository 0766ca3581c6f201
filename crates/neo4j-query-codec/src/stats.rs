use neo4j_query_types::{Counters, IntegerPolicy, IntegerValue, RawCounters};

/// Applies the active integer policy uniformly across every numeric
/// counter field; the two boolean flags pass through untouched.
pub fn decode_stats(raw: &RawCounters, policy: IntegerPolicy) -> Counters {
    let iv = |v: i64| IntegerValue::from_i64(v, policy);
    Counters {
        nodes_created: iv(raw.nodes_created),
        nodes_deleted: iv(raw.nodes_deleted),
        relationships_created: iv(raw.relationships_created),
        relationships_deleted: iv(raw.relationships_deleted),
        properties_set: iv(raw.properties_set),
        labels_added: iv(raw.labels_added),
        labels_removed: iv(raw.labels_removed),
        indexes_added: iv(raw.indexes_added),
        indexes_removed: iv(raw.indexes_removed),
        constraints_added: iv(raw.constraints_added),
        constraints_removed: iv(raw.constraints_removed),
        system_updates: iv(raw.system_updates),
        contains_updates: raw.contains_updates,
        contains_system_updates: raw.contains_system_updates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_zero_counters_by_default() {
        let raw = RawCounters::default();
        let counters = decode_stats(&raw, IntegerPolicy::LosslessInteger);
        assert_eq!(counters.nodes_created, IntegerValue::Lossless(0));
        assert!(!counters.contains_updates);
    }

    #[test]
    fn non_zero_counters_route_through_policy() {
        let raw = RawCounters { nodes_created: 3, contains_updates: true, ..Default::default() };
        let counters = decode_stats(&raw, IntegerPolicy::BigInt);
        match counters.nodes_created {
            IntegerValue::Big(b) => assert_eq!(b.to_string(), "3"),
            other => panic!("expected BigInt, got {other:?}"),
        }
        assert!(counters.contains_updates);
    }
}
