use std::collections::HashMap;

use neo4j_query_types::{IntegerPolicy, IntegerValue, ProfiledPlan, RawProfiledPlan, Result};

use crate::value::decode_value;

/// Recursively decodes a plan tree, routing every numeric field through the
/// active integer policy and every `arguments` entry through [`decode_value`].
pub fn decode_profile(raw: &RawProfiledPlan, policy: IntegerPolicy) -> Result<ProfiledPlan> {
    let iv = |v: i64| IntegerValue::from_i64(v, policy);

    let mut args = HashMap::with_capacity(raw.arguments.len());
    for (key, value) in &raw.arguments {
        args.insert(key.clone(), decode_value(value, policy)?);
    }

    let children = raw
        .children
        .iter()
        .map(|child| decode_profile(child, policy))
        .collect::<Result<Vec<_>>>()?;

    Ok(ProfiledPlan {
        db_hits: iv(raw.db_hits),
        rows: iv(raw.records),
        has_page_cache_stats: raw.has_page_cache_stats,
        page_cache_hits: iv(raw.page_cache_hits),
        page_cache_misses: iv(raw.page_cache_misses),
        page_cache_hit_ratio: raw.page_cache_hit_ratio,
        time: iv(raw.time),
        operator_type: raw.operator_type.clone(),
        args,
        identifiers: raw.identifiers.clone(),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_leaf_plan() {
        let raw = RawProfiledPlan {
            db_hits: 10,
            records: 2,
            has_page_cache_stats: false,
            page_cache_hits: 0,
            page_cache_misses: 0,
            page_cache_hit_ratio: 0.0,
            time: 0,
            operator_type: "NodeByLabelScan".into(),
            arguments: HashMap::new(),
            identifiers: vec!["n".into()],
            children: vec![],
        };
        let plan = decode_profile(&raw, IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(plan.db_hits, IntegerValue::Lossless(10));
        assert_eq!(plan.operator_type, "NodeByLabelScan");
        assert!(plan.children.is_empty());
    }

    #[test]
    fn decodes_nested_children() {
        let child = RawProfiledPlan {
            db_hits: 1,
            records: 1,
            has_page_cache_stats: false,
            page_cache_hits: 0,
            page_cache_misses: 0,
            page_cache_hit_ratio: 0.0,
            time: 0,
            operator_type: "AllNodesScan".into(),
            arguments: HashMap::new(),
            identifiers: vec![],
            children: vec![],
        };
        let root = RawProfiledPlan {
            db_hits: 5,
            records: 5,
            has_page_cache_stats: false,
            page_cache_hits: 0,
            page_cache_misses: 0,
            page_cache_hit_ratio: 0.0,
            time: 0,
            operator_type: "ProduceResults".into(),
            arguments: HashMap::new(),
            identifiers: vec![],
            children: vec![child],
        };
        let plan = decode_profile(&root, IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(plan.children.len(), 1);
        assert_eq!(plan.children[0].operator_type, "AllNodesScan");
    }
}
